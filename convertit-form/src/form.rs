//! Converter form state
//!
//! Owns the UI state of the single-screen converter: the active category,
//! the value field, and the input/output unit selections. The conversion
//! result is a pure function of this state, recomputed on demand.

use crate::NumericField;
use convertit_units::{Category, Quantity, Unit, CATALOG};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from form interactions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("unit index {index} out of range for a list of {len}")]
    UnitIndexOutOfRange { index: usize, len: usize },
}

/// The converter's complete UI state
///
/// Unit selections are indices into the active category's catalog list, so
/// the input and output units always share a category. Switching categories
/// resets both selections, which is what keeps that invariant intact.
/// Deserialization goes through the same bounds check as the selection
/// methods, so a restored form can never hold an out-of-range index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawForm")]
pub struct ConverterForm {
    category: Category,
    field: NumericField,
    input_unit: usize,
    output_unit: usize,
}

/// Serialized shape of `ConverterForm`, validated before use
#[derive(Deserialize)]
struct RawForm {
    category: Category,
    field: NumericField,
    input_unit: usize,
    output_unit: usize,
}

impl TryFrom<RawForm> for ConverterForm {
    type Error = FormError;

    fn try_from(raw: RawForm) -> Result<Self, FormError> {
        let len = CATALOG.units_for(raw.category).len();
        for index in [raw.input_unit, raw.output_unit] {
            if index >= len {
                return Err(FormError::UnitIndexOutOfRange { index, len });
            }
        }

        Ok(ConverterForm {
            category: raw.category,
            field: raw.field,
            input_unit: raw.input_unit,
            output_unit: raw.output_unit,
        })
    }
}

impl ConverterForm {
    /// Fresh form: temperature, converting °F to °C, value 0
    pub fn new() -> Self {
        let category = Category::Temperature;
        let units = CATALOG.units_for(category);
        let input_unit = units.iter().position(|u| u.symbol == "°F").unwrap_or(0);
        let output_unit = units.iter().position(|u| u.symbol == "°C").unwrap_or(0);

        ConverterForm {
            category,
            field: NumericField::default(),
            input_unit,
            output_unit,
        }
    }

    /// The active category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selectable units for the active category, in presentation order
    pub fn unit_options(&self) -> &'static [Unit] {
        CATALOG.units_for(self.category)
    }

    /// Switch category, resetting both unit selections
    ///
    /// Stale selections from the old category would violate the
    /// same-category invariant, so both snap to the new list's first two
    /// units. Re-selecting the active category keeps the selections.
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }

        let (input, output) = CATALOG.default_pair(category);
        debug!(from = %self.category, to = %category, "category changed, unit selections reset");

        self.category = category;
        self.input_unit = input;
        self.output_unit = output;
    }

    /// Select the input unit by its index in `unit_options`
    pub fn select_input_unit(&mut self, index: usize) -> Result<(), FormError> {
        self.input_unit = self.checked_index(index)?;
        Ok(())
    }

    /// Select the output unit by its index in `unit_options`
    pub fn select_output_unit(&mut self, index: usize) -> Result<(), FormError> {
        self.output_unit = self.checked_index(index)?;
        Ok(())
    }

    /// The currently selected input unit
    pub fn input_unit(&self) -> &'static Unit {
        &CATALOG.units_for(self.category)[self.input_unit]
    }

    /// The currently selected output unit
    pub fn output_unit(&self) -> &'static Unit {
        &CATALOG.units_for(self.category)[self.output_unit]
    }

    /// Update the value field from user-typed text
    pub fn set_input_text(&mut self, text: &str) {
        self.field.set_text(text);
    }

    /// The value field's raw text
    pub fn input_text(&self) -> &str {
        self.field.text()
    }

    /// Set the value directly
    pub fn set_value(&mut self, value: f64) {
        self.field.set_value(value);
    }

    /// The current numeric value
    pub fn value(&self) -> f64 {
        self.field.value()
    }

    /// The conversion result for the current state
    ///
    /// Both selections index into the same category list, so the conversion
    /// cannot mismatch.
    pub fn result(&self) -> Quantity {
        let from = self.input_unit();
        let to = self.output_unit();
        let value = to.from_base(from.to_base(self.field.value()));
        Quantity::new(value, to.clone())
    }

    /// The result rendered with the default format, symbol included
    pub fn formatted_result(&self) -> String {
        self.result().to_string()
    }

    fn checked_index(&self, index: usize) -> Result<usize, FormError> {
        let len = self.unit_options().len();
        if index < len {
            Ok(index)
        } else {
            Err(FormError::UnitIndexOutOfRange { index, len })
        }
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state() {
        let form = ConverterForm::new();
        assert_eq!(form.category(), Category::Temperature);
        assert_eq!(form.input_unit().symbol, "°F");
        assert_eq!(form.output_unit().symbol, "°C");
        assert_eq!(form.value(), 0.0);
    }

    #[test]
    fn test_body_temperature() {
        let mut form = ConverterForm::new();
        form.set_input_text("98.6");

        assert_relative_eq!(form.result().value, 37.0, epsilon = 1e-9);
        assert_eq!(form.formatted_result(), "37 °C");
    }

    #[test]
    fn test_category_change_resets_selections() {
        let mut form = ConverterForm::new();
        form.select_category(Category::Length);

        assert_eq!(form.category(), Category::Length);
        assert_eq!(form.input_unit().symbol, "m");
        assert_eq!(form.output_unit().symbol, "km");

        // No stale cross-category unit remains selected
        let options = form.unit_options();
        assert!(options.iter().any(|u| u == form.input_unit()));
        assert!(options.iter().any(|u| u == form.output_unit()));
    }

    #[test]
    fn test_reselecting_category_keeps_selections() {
        let mut form = ConverterForm::new();
        form.select_input_unit(0).unwrap();
        form.select_category(Category::Temperature);
        assert_eq!(form.input_unit().symbol, "K");
    }

    #[test]
    fn test_kilometers_to_meters() {
        let mut form = ConverterForm::new();
        form.select_category(Category::Length);
        form.select_input_unit(1).unwrap(); // km
        form.select_output_unit(0).unwrap(); // m
        form.set_value(1.0);

        assert_eq!(form.result().value, 1000.0);
        assert_eq!(form.formatted_result(), "1000 m");
    }

    #[test]
    fn test_gallons_to_liters() {
        let mut form = ConverterForm::new();
        form.select_category(Category::Volume);
        form.select_input_unit(4).unwrap(); // gal
        form.select_output_unit(1).unwrap(); // L
        form.set_value(1.0);

        assert_relative_eq!(form.result().value, 3.785411784, epsilon = 1e-9);
    }

    #[test]
    fn test_selection_out_of_range() {
        let mut form = ConverterForm::new();
        let err = form.select_input_unit(7).unwrap_err();
        assert_eq!(err, FormError::UnitIndexOutOfRange { index: 7, len: 3 });
        // Selection is unchanged after the failed update
        assert_eq!(form.input_unit().symbol, "°F");
    }

    #[test]
    fn test_malformed_input_keeps_result_stable() {
        let mut form = ConverterForm::new();
        form.set_input_text("100");
        let before = form.formatted_result();

        form.set_input_text("10x");
        assert_eq!(form.formatted_result(), before);
        assert_eq!(form.input_text(), "10x");
    }

    #[test]
    fn test_linear_round_trip() {
        let mut form = ConverterForm::new();
        form.select_category(Category::Length);

        let count = form.unit_options().len();
        for from in 0..count {
            for to in 0..count {
                form.select_input_unit(from).unwrap();
                form.select_output_unit(to).unwrap();
                form.set_value(12.5);
                let there = form.result().value;

                form.select_input_unit(to).unwrap();
                form.select_output_unit(from).unwrap();
                form.set_value(there);
                assert_relative_eq!(form.result().value, 12.5, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_non_finite_value_keeps_result_stable() {
        let mut form = ConverterForm::new();
        form.set_value(100.0);
        let before = form.formatted_result();

        form.set_value(f64::NAN);
        assert_eq!(form.formatted_result(), before);
    }

    #[test]
    fn test_deserialization_round_trip() {
        let mut form = ConverterForm::new();
        form.select_category(Category::Mass);
        form.select_input_unit(3).unwrap();
        form.set_value(2.0);

        let json = serde_json::to_string(&form).unwrap();
        let back: ConverterForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_deserialization_rejects_out_of_range_index() {
        let json = r#"{
            "category": "Temperature",
            "field": {"text": "1", "value": 1.0},
            "input_unit": 99,
            "output_unit": 0
        }"#;

        let err = serde_json::from_str::<ConverterForm>(json).unwrap_err();
        assert!(
            err.to_string().contains("unit index 99 out of range"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_formatted_result_ends_with_symbol() {
        let mut form = ConverterForm::new();
        for category in Category::ALL {
            form.select_category(category);
            form.set_value(1.0);
            let rendered = form.formatted_result();
            assert!(
                rendered.ends_with(&form.output_unit().symbol),
                "{rendered:?} does not end with the output symbol"
            );
        }
    }
}

//! Quantity type - a value with an associated unit

use crate::format::{format_value, NumberFormat};
use crate::unit::ConversionError;
use crate::{Category, Unit, CATALOG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric value with an associated unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Create a quantity from a catalog symbol
    pub fn from_symbol(value: f64, symbol: &str) -> Result<Self, ConversionError> {
        let unit = CATALOG
            .find(symbol)
            .cloned()
            .ok_or_else(|| ConversionError::UnknownUnit(symbol.to_string()))?;
        Ok(Quantity { value, unit })
    }

    /// Get the category of this quantity
    pub fn category(&self) -> Category {
        self.unit.category
    }

    /// Check if two quantities share a category
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Get the value expressed in the category's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Convert to another unit of the same category
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConversionError> {
        let value = self.unit.convert_to(self.value, target)?;
        Ok(Quantity::new(value, target.clone()))
    }

    /// Render as value followed by the unit symbol, e.g. "37 °C"
    pub fn format(&self, format: NumberFormat) -> String {
        format!("{} {}", format_value(self.value, format), self.unit.symbol)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(NumberFormat::default()))
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        // Compare base-unit values for equality
        self.is_compatible(other) && self.base_value() == other.base_value()
    }
}

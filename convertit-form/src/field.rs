//! Numeric text field semantics
//!
//! The converter's value field never errors: malformed input keeps the last
//! valid value and empty input reads as zero.

use convertit_units::{format_value, NumberFormat};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A text field holding a numeric value
///
/// Keeps the raw text as typed alongside the last valid parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericField {
    text: String,
    value: f64,
}

impl NumericField {
    pub fn new(value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        NumericField {
            text: render(value),
            value,
        }
    }

    /// The last valid numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The raw text as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Update from user-typed text
    ///
    /// Empty or whitespace-only text reads as zero. Text that does not parse
    /// as a finite number keeps the previous valid value.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.value = 0.0;
            return;
        }

        match trimmed.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => self.value = parsed,
            _ => trace!(text, last_valid = self.value, "ignoring unparsable input"),
        }
    }

    /// Programmatic update; re-renders the text
    ///
    /// Non-finite values are rejected the same way `set_text` rejects them:
    /// the previous value stays.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            trace!(value, last_valid = self.value, "ignoring non-finite value");
            return;
        }
        self.value = value;
        self.text = render(value);
    }
}

impl Default for NumericField {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn render(value: f64) -> String {
    format_value(value, NumberFormat::default())
}

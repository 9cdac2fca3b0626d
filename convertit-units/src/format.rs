//! Numeric display formatting

use serde::{Deserialize, Serialize};

/// Display format for converted values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Fixed decimal places, trailing zeros trimmed
    Decimal(u32),
    /// Significant figures
    SigFigs(u32),
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::SigFigs(6)
    }
}

/// Render a value with the given format
pub fn format_value(value: f64, format: NumberFormat) -> String {
    match format {
        NumberFormat::Decimal(places) => {
            trim_trailing_zeros(format!("{:.*}", places as usize, value))
        }
        NumberFormat::SigFigs(digits) => format_sigfigs(value, digits.max(1)),
    }
}

fn trim_trailing_zeros(rendered: String) -> String {
    if !rendered.contains('.') {
        return rendered;
    }
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn format_sigfigs(value: f64, digits: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits as i32 - 1 - magnitude;
    // powi saturates past the f64 range; leave extreme magnitudes alone
    if shift.abs() > 300 {
        return value.to_string();
    }

    let factor = 10f64.powi(shift);
    let rounded = (value * factor).round() / factor;
    rounded.to_string()
}

//! Unit representation with conversion rules

use crate::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How a unit maps to and from its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConversionRule {
    /// Proportional units: `base = value * coefficient`
    Linear { coefficient: f64 },
    /// Offset units (temperature): `base = value * scale + offset`
    Affine { scale: f64, offset: f64 },
}

impl ConversionRule {
    /// Convert a value in this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { coefficient } => value * coefficient,
            ConversionRule::Affine { scale, offset } => value * scale + offset,
        }
    }

    /// Convert a value in the category's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            ConversionRule::Linear { coefficient } => value / coefficient,
            ConversionRule::Affine { scale, offset } => (value - offset) / scale,
        }
    }
}

/// A selectable measurement unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display symbol (e.g. "km", "°C")
    pub symbol: String,
    /// Unit name (e.g. "kilometers", "celsius")
    pub name: String,
    /// The category this unit belongs to
    pub category: Category,
    /// Rule mapping values to the category's base unit
    pub rule: ConversionRule,
}

impl Unit {
    /// Create a unit with a proportional conversion rule
    pub fn linear(symbol: &str, name: &str, category: Category, coefficient: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            rule: ConversionRule::Linear { coefficient },
        }
    }

    /// Create a unit with an offset conversion rule (temperature)
    pub fn affine(symbol: &str, name: &str, category: Category, scale: f64, offset: f64) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            rule: ConversionRule::Affine { scale, offset },
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        match self.rule {
            ConversionRule::Linear { coefficient } => coefficient == 1.0,
            ConversionRule::Affine { scale, offset } => scale == 1.0 && offset == 0.0,
        }
    }

    /// Check if two units belong to the same category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        self.rule.to_base(value)
    }

    /// Convert a value from the category's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        self.rule.from_base(value)
    }

    /// Convert a value from this unit to another unit of the same category
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::CategoryMismatch {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_category: self.category,
                to_category: target.category,
            });
        }

        Ok(target.from_base(self.to_base(value)))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} ({from_category}) to {to} ({to_category}): units belong to different categories")]
    CategoryMismatch {
        from: String,
        to: String,
        from_category: Category,
        to_category: Category,
    },

    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

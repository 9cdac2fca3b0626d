//! Measurement categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of commensurable units (all length units, all mass units, ...)
///
/// Determines which unit list is active in the converter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Temperature,
    Length,
    Time,
    Volume,
    Mass,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 5] = [
        Category::Temperature,
        Category::Length,
        Category::Time,
        Category::Volume,
        Category::Mass,
    ];

    /// Human-readable name for pickers and logs
    pub fn label(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Time => "Time",
            Category::Volume => "Volume",
            Category::Mass => "Mass",
        }
    }

    /// Name of the base unit used as the conversion intermediate
    pub fn base_unit_name(&self) -> &'static str {
        match self {
            Category::Temperature => "kelvin",
            Category::Length => "meter",
            Category::Time => "second",
            Category::Volume => "liter",
            Category::Mass => "kilogram",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_order() {
        assert_eq!(Category::ALL[0], Category::Temperature);
        assert_eq!(Category::ALL.len(), 5);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(format!("{}", Category::Volume), "Volume");
    }

    #[test]
    fn test_base_unit_names() {
        assert_eq!(Category::Temperature.base_unit_name(), "kelvin");
        assert_eq!(Category::Mass.base_unit_name(), "kilogram");
    }
}

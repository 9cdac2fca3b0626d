//! Unit catalog - the ordered unit lists backing the converter form

use crate::{Category, Unit};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Global unit catalog
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Ordered, per-category unit lists
///
/// Every category has a non-empty list whose order matches the converter's
/// segmented pickers.
pub struct UnitCatalog {
    units: HashMap<Category, Vec<Unit>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
        };
        catalog.register_temperature_units();
        catalog.register_length_units();
        catalog.register_time_units();
        catalog.register_volume_units();
        catalog.register_mass_units();
        catalog
    }

    /// Selectable units for a category, in presentation order
    pub fn units_for(&self, category: Category) -> &[Unit] {
        self.units.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Look up a unit by symbol within a category
    pub fn get(&self, category: Category, symbol: &str) -> Option<&Unit> {
        self.units_for(category).iter().find(|u| u.symbol == symbol)
    }

    /// Look up a unit by symbol across all categories
    pub fn find(&self, symbol: &str) -> Option<&Unit> {
        Category::ALL.iter().find_map(|&c| self.get(c, symbol))
    }

    /// Indices of the default input/output selection for a category
    pub fn default_pair(&self, category: Category) -> (usize, usize) {
        default_pair(self.units_for(category))
    }

    fn register(&mut self, unit: Unit) {
        self.units.entry(unit.category).or_default().push(unit);
    }

    fn register_temperature_units(&mut self) {
        // Kelvin is the base unit
        self.register(Unit::affine("K", "kelvin", Category::Temperature, 1.0, 0.0));
        self.register(Unit::affine("°C", "celsius", Category::Temperature, 1.0, 273.15));
        // Scale 5/9 with the offset chosen so that 32 °F lands on 273.15 K
        self.register(Unit::affine(
            "°F",
            "fahrenheit",
            Category::Temperature,
            5.0 / 9.0,
            273.15 - 32.0 * 5.0 / 9.0,
        ));
    }

    fn register_length_units(&mut self) {
        self.register(Unit::linear("m", "meters", Category::Length, 1.0));
        self.register(Unit::linear("km", "kilometers", Category::Length, 1000.0));
        self.register(Unit::linear("ft", "feet", Category::Length, 0.3048));
        self.register(Unit::linear("yd", "yards", Category::Length, 0.9144));
        self.register(Unit::linear("mi", "miles", Category::Length, 1609.344));
    }

    fn register_time_units(&mut self) {
        self.register(Unit::linear("s", "seconds", Category::Time, 1.0));
        self.register(Unit::linear("min", "minutes", Category::Time, 60.0));
        self.register(Unit::linear("hr", "hours", Category::Time, 3600.0));
        self.register(Unit::linear("days", "days", Category::Time, 86400.0));
    }

    fn register_volume_units(&mut self) {
        self.register(Unit::linear("mL", "milliliters", Category::Volume, 0.001));
        self.register(Unit::linear("L", "liters", Category::Volume, 1.0));
        // Metric cup of 240 mL, not the US customary cup
        self.register(Unit::linear("c", "cups", Category::Volume, 0.24));
        self.register(Unit::linear("pt", "pints", Category::Volume, 0.473176473));
        self.register(Unit::linear("gal", "gallons", Category::Volume, 3.785411784));
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::linear("g", "grams", Category::Mass, 0.001));
        self.register(Unit::linear("kg", "kilograms", Category::Mass, 1.0));
        self.register(Unit::linear("oz", "ounces", Category::Mass, 0.028349523125));
        self.register(Unit::linear("lb", "pounds", Category::Mass, 0.45359237));
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Default input/output indices for a unit list: the first two units, or the
/// first unit twice if only one exists
pub fn default_pair(units: &[Unit]) -> (usize, usize) {
    if units.len() > 1 {
        (0, 1)
    } else {
        (0, 0)
    }
}

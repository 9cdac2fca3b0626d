//! ConvertIt Units - Measurement Categories and Unit Conversion
//!
//! Provides the static unit catalog and the conversion engine behind the
//! converter form. Every unit maps to its category's base unit through a
//! linear or affine rule; converting between two units of the same category
//! goes through that base.
//!
//! Categories:
//! - Temperature (K, °C, °F)
//! - Length (m, km, ft, yd, mi)
//! - Time (s, min, hr, days)
//! - Volume (mL, L, c, pt, gal)
//! - Mass (g, kg, oz, lb)

mod catalog;
mod category;
mod format;
mod quantity;
mod unit;

pub use catalog::{default_pair, UnitCatalog, CATALOG};
pub use category::Category;
pub use format::{format_value, NumberFormat};
pub use quantity::Quantity;
pub use unit::{ConversionError, ConversionRule, Unit};

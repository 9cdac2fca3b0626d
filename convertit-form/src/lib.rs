//! ConvertIt Form - single-screen converter state
//!
//! The state model behind the converter UI: category picker, numeric value
//! field, input/output unit selections, and the formatted conversion result.
//! Rendering and layout belong to the embedding presentation layer; this
//! crate owns the state and the rules that keep it consistent.

mod field;
mod form;

pub use field::NumericField;
pub use form::{ConverterForm, FormError};

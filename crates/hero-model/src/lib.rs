//! Superhero record model.
//!
//! A [`Hero`] is built once per raw record and never mutated afterwards.
//! Construction goes through the [`HeroField`] allow-list, so unknown keys in
//! the source are skipped instead of failing the load.

pub mod error;
pub mod field;
pub mod hero;
pub mod measurement;

pub use error::UnknownFieldError;
pub use field::HeroField;
pub use hero::{Hero, RawRecord, UNKNOWN_LABEL};
pub use measurement::{Measurement, parse_leading_f64, value_or_zero};

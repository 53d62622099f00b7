//! Superhero dataset ingestion.
//!
//! Loading is the only fallible stage of a run: a missing, unreadable or
//! malformed source aborts before any statistics are computed. Individual
//! records never fail; see [`hero_model::Hero::from_record`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hero_ingest::{DataSource, load_heroes};
//!
//! let heroes = load_heroes(Path::new("newHeroes.json"))?;
//!
//! let source = DataSource::new(
//!     Path::new("heroes_information.csv"),
//!     Some(Path::new("super_hero_powers.csv")),
//! );
//! let heroes = source.load()?;
//! ```

mod error;
mod json;
mod kaggle;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === JSON Loading ===
pub use json::{heroes_from_records, load_heroes, read_records};

// === CSV Loading ===
pub use kaggle::{POWERS_NAME_COLUMN, canonical_header, load_kaggle_csv};

// === Source Selection ===
pub use source::{DATA_ENV_VAR, DEFAULT_DATA_FILE, DataSource, default_data_path};

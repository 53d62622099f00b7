//! Dataset location and format selection.

use std::path::{Path, PathBuf};

use hero_model::Hero;

use crate::error::Result;
use crate::json::load_heroes;
use crate::kaggle::load_kaggle_csv;

/// Environment variable overriding the default dataset path.
pub const DATA_ENV_VAR: &str = "HEROES_DATA";
/// Dataset file name used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "newHeroes.json";

/// Default dataset path: `HEROES_DATA` if set, otherwise `newHeroes.json`
/// in the working directory.
pub fn default_data_path() -> PathBuf {
    if let Ok(path) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Where heroes are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON array of hero records.
    Json(PathBuf),
    /// The information and powers CSV pair.
    KaggleCsv { info: PathBuf, powers: PathBuf },
}

impl DataSource {
    /// Pick the source for a dataset path and an optional powers table.
    pub fn new(data: &Path, csv_powers: Option<&Path>) -> Self {
        match csv_powers {
            Some(powers) => Self::KaggleCsv {
                info: data.to_path_buf(),
                powers: powers.to_path_buf(),
            },
            None => Self::Json(data.to_path_buf()),
        }
    }

    /// Load every hero, in source order.
    pub fn load(&self) -> Result<Vec<Hero>> {
        match self {
            Self::Json(path) => load_heroes(path),
            Self::KaggleCsv { info, powers } => load_kaggle_csv(info, powers),
        }
    }

    /// Primary path, for logging.
    pub fn path(&self) -> &Path {
        match self {
            Self::Json(path) => path,
            Self::KaggleCsv { info, .. } => info,
        }
    }
}

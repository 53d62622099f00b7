//! The dataset's original CSV form.
//!
//! Two files: an information table (`heroes_information.csv`) with one row
//! per hero and headers such as `Eye color`, and a powers table
//! (`super_hero_powers.csv`) with a `hero_names` column followed by one
//! `True`/`False` column per power.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use hero_model::{Hero, HeroField};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Name column of the powers table.
pub const POWERS_NAME_COLUMN: &str = "hero_names";

/// Load heroes from the information and powers CSV files.
///
/// Headers of the information table are matched after lowercasing and
/// removing whitespace, so `Eye color` populates `eyecolor`. Powers are
/// attached by hero name in column order; when the powers table lists a name
/// twice the first row wins. Heroes without a powers row get no powers.
pub fn load_kaggle_csv(info_path: &Path, powers_path: &Path) -> Result<Vec<Hero>> {
    let powers = read_power_table(powers_path)?;
    let (headers, rows) = read_table(info_path)?;

    let fields: Vec<Option<HeroField>> = headers
        .iter()
        .map(|header| HeroField::from_key(&canonical_header(header)))
        .collect();
    if !fields.contains(&Some(HeroField::Name)) {
        return Err(IngestError::MissingColumn {
            column: HeroField::Name.to_string(),
            path: info_path.to_path_buf(),
        });
    }

    let heroes: Vec<Hero> = rows
        .iter()
        .map(|row| {
            let mut hero = Hero::default();
            for (field, value) in fields.iter().zip(row.iter()) {
                if let Some(field) = field {
                    hero.set_text(*field, value);
                }
            }
            if let Some(list) = powers.get(&hero.name) {
                hero.powers.clone_from(list);
            }
            hero
        })
        .collect();
    info!(
        info = %info_path.display(),
        powers = %powers_path.display(),
        heroes = heroes.len(),
        "loaded heroes from CSV"
    );
    Ok(heroes)
}

/// Lowercase a header and drop its whitespace (`"Eye color"` -> `"eyecolor"`).
pub fn canonical_header(header: &str) -> String {
    header
        .trim_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn read_power_table(path: &Path) -> Result<HashMap<String, Vec<String>>> {
    let (headers, rows) = read_table(path)?;
    let name_index = headers
        .iter()
        .position(|header| canonical_header(header) == POWERS_NAME_COLUMN)
        .ok_or_else(|| IngestError::MissingColumn {
            column: POWERS_NAME_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut powers: HashMap<String, Vec<String>> = HashMap::new();
    for row in &rows {
        let Some(name) = row.get(name_index) else {
            continue;
        };
        if powers.contains_key(name) {
            debug!(name, "duplicate powers row ignored");
            continue;
        }
        let list = headers
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(index, (_, value))| *index != name_index && is_true(value))
            .map(|(_, (power, _))| power.to_string())
            .collect();
        powers.insert(name.to_string(), list);
    }
    debug!(path = %path.display(), heroes = powers.len(), "read power table");
    Ok(powers)
}

fn read_table(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .clone();
    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| IngestError::csv(path, source))?;
    Ok((headers, rows))
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

//! JSON array datasets.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hero_model::{Hero, RawRecord};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

/// Parse a JSON array of record objects.
///
/// Elements that are not objects are skipped with a warning. `origin` names
/// the input in error messages.
pub fn read_records<R: Read>(reader: R, origin: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_reader(reader).map_err(|source| IngestError::JsonParse {
        origin: origin.to_string(),
        source,
    })?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(IngestError::NotAnArray {
                origin: origin.to_string(),
                found: json_kind(&other),
            });
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(record) => records.push(record),
            other => warn!(origin, index, kind = json_kind(&other), "skipping non-object record"),
        }
    }
    debug!(origin, records = records.len(), "parsed JSON records");
    Ok(records)
}

/// Build one hero per record, preserving order.
pub fn heroes_from_records(records: &[RawRecord]) -> Vec<Hero> {
    records.iter().map(Hero::from_record).collect()
}

/// Load heroes from a JSON array file.
pub fn load_heroes(path: &Path) -> Result<Vec<Hero>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(BufReader::new(file), &path.display().to_string())?;
    let heroes = heroes_from_records(&records);
    info!(path = %path.display(), heroes = heroes.len(), "loaded heroes");
    Ok(heroes)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

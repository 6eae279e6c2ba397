//! FILENAME: app/src/datasets.rs
// PURPOSE: Loads the catalog datasets from JSON files.
// CONTEXT: Accepts either the split form ({"with_scripts": [...],
//          "without_scripts": [...]}) or a bare array of rows, from
//          which the reduced variant is derived by dropping the
//          script-detail columns. Field order is preserved because it
//          drives the export header.

use std::fs;
use std::path::Path;

use catalog::{Dataset, DatasetStore, RawRow};
use serde::Deserialize;
use serde_json::{Map, Value};

type RawRowMap = Map<String, Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Split {
        with_scripts: Vec<RawRowMap>,
        without_scripts: Vec<RawRowMap>,
    },
    Flat(Vec<RawRowMap>),
}

/// Reads a dataset file into the two-variant store.
pub fn load_store(path: &Path) -> Result<DatasetStore, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read dataset file {}: {}", path.display(), e))?;
    let file: DatasetFile = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse dataset file {}: {}", path.display(), e))?;

    let store = match file {
        DatasetFile::Split {
            with_scripts,
            without_scripts,
        } => DatasetStore::new(load_rows(with_scripts), load_rows(without_scripts)),
        DatasetFile::Flat(rows) => DatasetStore::from_full(load_rows(rows)),
    };
    Ok(store)
}

fn load_rows(rows: Vec<RawRowMap>) -> Dataset {
    let raw: Vec<RawRow> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, value)| (key, value_text(value)))
                .collect()
        })
        .collect();
    Dataset::load(raw)
}

/// String form of a JSON cell. Nulls read as empty, everything else as
/// its JSON rendering.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

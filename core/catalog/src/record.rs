//! FILENAME: core/catalog/src/record.rs
//! PURPOSE: Script records - the immutable rows of the catalog.
//! CONTEXT: A record is one SAP test-script step, stored as an ordered
//! list of named string fields plus a stable identifier. Field order is
//! preserved from the source because it drives the export header line.

use serde::{Deserialize, Serialize};

/// Unique identifier for a record within a dataset.
/// Identifiers are opaque strings everywhere; ids synthesized at load
/// time are the decimal form of the row's 1-based position.
pub type RecordId = String;

/// The field name under which a record's identifier is stored.
pub const ID_FIELD: &str = "ID";

/// A single named field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    /// Field name (e.g., "Workstream", "Tcode").
    pub name: String,

    /// Field value. Always a string; absent source cells load as "".
    pub value: String,
}

impl RecordField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        RecordField {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One row of the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Stable identifier, unique within its dataset.
    pub id: RecordId,

    /// Ordered fields, including the `ID` field itself.
    pub fields: Vec<RecordField>,
}

impl ScriptRecord {
    /// Builds a record from raw `(name, value)` pairs.
    ///
    /// If the pairs carry a non-empty `ID` field it becomes the record's
    /// identifier; otherwise `fallback_id` (the 1-based load position) is
    /// used and an `ID` field is appended so exports still carry it.
    pub fn from_raw(pairs: Vec<(String, String)>, fallback_id: usize) -> Self {
        let mut fields: Vec<RecordField> = pairs
            .into_iter()
            .map(|(name, value)| RecordField::new(name, value))
            .collect();

        let existing = fields
            .iter()
            .find(|f| f.name == ID_FIELD && !f.value.is_empty())
            .map(|f| f.value.clone());

        let id = match existing {
            Some(id) => id,
            None => {
                let id = fallback_id.to_string();
                // Keep any empty ID cell coherent with the assigned id.
                if let Some(f) = fields.iter_mut().find(|f| f.name == ID_FIELD) {
                    f.value = id.clone();
                } else {
                    fields.push(RecordField::new(ID_FIELD, id.clone()));
                }
                id
            }
        };

        ScriptRecord { id, fields }
    }

    /// Returns the value of the named field, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Iterates field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

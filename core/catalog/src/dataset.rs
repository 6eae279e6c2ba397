//! FILENAME: core/catalog/src/dataset.rs
//! PURPOSE: Datasets and the two-variant dataset store.
//! CONTEXT: A dataset is an ordered, immutable sequence of records loaded
//! once at startup. The store holds the full variant (with script-detail
//! columns) and the reduced variant (without them); switching variants is
//! a pure read - ledger resets on switch are the session layer's job.

use serde::{Deserialize, Serialize};

use crate::record::{RecordId, ScriptRecord};

/// Raw input row at the load boundary: ordered `(field, value)` pairs.
pub type RawRow = Vec<(String, String)>;

/// The script-detail columns that the reduced variant omits.
pub const SCRIPT_DETAIL_FIELDS: &[&str] = &[
    "Step_Number",
    "Description",
    "App_or_Module",
    "Job_Function_Security",
    "Tcode",
];

/// Which of the two preloaded datasets is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetVariant {
    /// Full field set, including script-detail columns.
    WithScripts,
    /// Reduced field set, script-detail columns omitted.
    WithoutScripts,
}

/// An ordered, immutable sequence of script records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<ScriptRecord>,
}

impl Dataset {
    /// Loads raw rows, assigning missing identifiers by 1-based position.
    /// Input order is preserved; rows are not deduplicated and field
    /// shapes are not validated beyond presence.
    pub fn load(raw_rows: Vec<RawRow>) -> Self {
        let records = raw_rows
            .into_iter()
            .enumerate()
            .map(|(idx, pairs)| ScriptRecord::from_raw(pairs, idx + 1))
            .collect();
        Dataset { records }
    }

    pub fn records(&self) -> &[ScriptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&ScriptRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns true if the dataset contains a record with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ids of all records, in dataset order.
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.records.iter().map(|r| &r.id)
    }

    /// Returns a copy of this dataset with the named fields dropped from
    /// every record. Ids are unaffected.
    pub fn without_fields(&self, fields: &[&str]) -> Dataset {
        let records = self
            .records
            .iter()
            .map(|r| ScriptRecord {
                id: r.id.clone(),
                fields: r
                    .fields
                    .iter()
                    .filter(|f| !fields.contains(&f.name.as_str()))
                    .cloned()
                    .collect(),
            })
            .collect();
        Dataset { records }
    }
}

/// Holds both preloaded dataset variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStore {
    with_scripts: Dataset,
    without_scripts: Dataset,
}

impl DatasetStore {
    /// Creates a store from two independently loaded variants.
    pub fn new(with_scripts: Dataset, without_scripts: Dataset) -> Self {
        DatasetStore {
            with_scripts,
            without_scripts,
        }
    }

    /// Creates a store from the full dataset only, deriving the reduced
    /// variant by dropping the script-detail columns.
    pub fn from_full(with_scripts: Dataset) -> Self {
        let without_scripts = with_scripts.without_fields(SCRIPT_DETAIL_FIELDS);
        DatasetStore {
            with_scripts,
            without_scripts,
        }
    }

    /// Returns the requested variant. Pure read; never touches any
    /// selection or deletion state.
    pub fn variant(&self, variant: DatasetVariant) -> &Dataset {
        match variant {
            DatasetVariant::WithScripts => &self.with_scripts,
            DatasetVariant::WithoutScripts => &self.without_scripts,
        }
    }

    /// The full variant. Exports always draw from this one so the output
    /// carries the script-detail columns.
    pub fn full(&self) -> &Dataset {
        &self.with_scripts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: &[(&str, &str)]) -> RawRow {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_preserves_order_and_assigns_ids() {
        let ds = Dataset::load(vec![
            raw(&[("Country", "USA")]),
            raw(&[("Country", "Germany")]),
            raw(&[("ID", "99"), ("Country", "France")]),
        ]);
        let ids: Vec<&str> = ds.ids().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "99"]);
    }

    #[test]
    fn test_load_does_not_deduplicate() {
        let ds = Dataset::load(vec![raw(&[("Country", "USA")]), raw(&[("Country", "USA")])]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn test_without_fields_drops_columns() {
        let ds = Dataset::load(vec![raw(&[
            ("Country", "USA"),
            ("Tcode", "VA01"),
            ("Step_Number", "10"),
        ])]);
        let reduced = ds.without_fields(SCRIPT_DETAIL_FIELDS);
        let rec = &reduced.records()[0];
        assert_eq!(rec.value("Country"), Some("USA"));
        assert_eq!(rec.value("Tcode"), None);
        assert_eq!(rec.value("Step_Number"), None);
        // Identifier survives the projection.
        assert_eq!(rec.id, ds.records()[0].id);
    }

    #[test]
    fn test_store_variants_are_independent_reads() {
        let full = Dataset::load(vec![raw(&[("Country", "USA"), ("Tcode", "VA01")])]);
        let store = DatasetStore::from_full(full);
        assert_eq!(
            store
                .variant(DatasetVariant::WithScripts)
                .records()[0]
                .value("Tcode"),
            Some("VA01")
        );
        assert_eq!(
            store
                .variant(DatasetVariant::WithoutScripts)
                .records()[0]
                .value("Tcode"),
            None
        );
    }
}

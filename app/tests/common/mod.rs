//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the Cooper session integration tests.

use catalog::{Dataset, DatasetStore, FacetConfig, RawRow};
use app_lib::FilterSession;

/// Builds one raw row from `(field, value)` pairs.
pub fn raw(fields: &[(&str, &str)]) -> RawRow {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Ten-row sample catalog: three Manufacturing/USA rows, the rest spread
/// over other workstreams and countries. Ids are the 1-based positions.
pub fn sample_store() -> DatasetStore {
    let rows = vec![
        raw(&[("Workstream", "Manufacturing"), ("Country", "USA"), ("Region", "NA"), ("Tcode", "VA01"), ("Step_Number", "10")]),
        raw(&[("Workstream", "Manufacturing"), ("Country", "USA"), ("Region", "NA"), ("Tcode", "VA02"), ("Step_Number", "20")]),
        raw(&[("Workstream", "Manufacturing"), ("Country", "USA"), ("Region", "NA"), ("Tcode", "VA03"), ("Step_Number", "30")]),
        raw(&[("Workstream", "Finance"), ("Country", "Germany"), ("Region", "EMEA"), ("Tcode", "FB01"), ("Step_Number", "10")]),
        raw(&[("Workstream", "Finance"), ("Country", "Germany"), ("Region", "EMEA"), ("Tcode", "FB02"), ("Step_Number", "20")]),
        raw(&[("Workstream", "Logistics"), ("Country", "France"), ("Region", "EMEA"), ("Tcode", "LT01"), ("Step_Number", "10")]),
        raw(&[("Workstream", "Logistics"), ("Country", "France"), ("Region", "EMEA"), ("Tcode", "LT02"), ("Step_Number", "20")]),
        raw(&[("Workstream", "Sales"), ("Country", "Japan"), ("Region", "APAC"), ("Tcode", "VA11"), ("Step_Number", "10")]),
        raw(&[("Workstream", "Sales"), ("Country", "Japan"), ("Region", "APAC"), ("Tcode", "VA12"), ("Step_Number", "20")]),
        raw(&[("Workstream", "Sales"), ("Country", "India"), ("Region", "APAC"), ("Tcode", "VA13"), ("Step_Number", "30")]),
    ];
    DatasetStore::from_full(Dataset::load(rows))
}

/// A fresh session over the sample catalog with the standard facets.
pub fn sample_session() -> FilterSession {
    FilterSession::new(sample_store(), FacetConfig::sap_scripts())
}

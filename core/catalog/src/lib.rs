//! FILENAME: core/catalog/src/lib.rs
//! SAP script catalog for the Cooper filter module.
//!
//! This crate holds the static data the rest of the system filters over:
//! immutable datasets of script records and the ordered facet
//! configuration that drives cascading.
//!
//! Layers:
//! - `record`: One script step as an ordered, typed field mapping
//! - `dataset`: Loaded datasets and the two-variant store
//! - `facets`: Ordered facet definitions and the dependency policy

pub mod dataset;
pub mod facets;
pub mod record;

pub use dataset::{Dataset, DatasetStore, DatasetVariant, RawRow, SCRIPT_DETAIL_FIELDS};
pub use facets::{FacetConfig, FacetConfigError, FacetDefinition};
pub use record::{RecordField, RecordId, ScriptRecord, ID_FIELD};

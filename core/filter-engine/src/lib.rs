//! FILENAME: core/filter-engine/src/lib.rs
//! Cascading filter subsystem for the Cooper filter module.
//!
//! This crate provides the dependent multi-facet filtering engine and the
//! row selection/deletion ledger as pure, presentation-free logic. It
//! depends on `catalog` for records, datasets, and the ordered facet
//! configuration, and has zero references to any rendering API so every
//! adapter (and every test) calls identical code.
//!
//! Layers:
//! - `selection`: Draft/committed selection state with cascade-clear
//! - `engine`: Option preview and committed filtering (pure functions)
//! - `ledger`: Checked/deleted row bookkeeping for the session

pub mod engine;
pub mod ledger;
pub mod selection;

pub use engine::{apply, options_for};
pub use ledger::RowLedger;
pub use selection::{FacetOption, SelectionState};

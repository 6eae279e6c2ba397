//! FILENAME: core/interchange/src/lib.rs
//! Cooper Interchange Module
//!
//! Handles the format boundaries of the script catalog: reading uploaded
//! xlsx test scripts into grouped cases, and writing records or enriched
//! cases out as quoted CSV text.

mod cases;
mod csv_writer;
mod error;
mod xlsx_reader;

pub use cases::{cases_to_csv, ScriptCase, ScriptStep, CASE_CSV_HEADERS};
pub use csv_writer::{export_filename, quote_field, to_delimited_text, write_csv};
pub use error::InterchangeError;
pub use xlsx_reader::{group_steps, read_cases};

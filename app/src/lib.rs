//! FILENAME: app/src/lib.rs
//! Cooper application shell.
//!
//! Wires the core crates into a headless front end: the filter session
//! (one user's table state), dataset loading, enrichment configuration
//! and client, and the command-line adapter.

pub mod cli;
pub mod config;
pub mod datasets;
pub mod enrichment;
pub mod session;

pub use config::{ConfigError, EnrichmentConfig};
pub use datasets::load_store;
pub use enrichment::{enrich_cases, Enrich, EnrichmentError, OpenAiEnricher, DEFAULT_CONCURRENCY};
pub use session::FilterSession;

use std::process::ExitCode;

/// Entry point used by the binary.
pub fn run() -> ExitCode {
    cli::run()
}

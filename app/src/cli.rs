//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line front end for the catalog.
// CONTEXT: Two thin adapters over the library: `enrich` runs an uploaded
//          workbook through the enrichment service, `filter` commits
//          facet selections against a dataset and exports the visible
//          rows. All engine logic stays in the core crates.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use catalog::{DatasetVariant, FacetConfig};
use clap::{Parser, Subcommand};
use env_logger::Env;
use interchange::{cases_to_csv, export_filename, read_cases, InterchangeError};

use crate::config::EnrichmentConfig;
use crate::datasets::load_store;
use crate::enrichment::{enrich_cases, OpenAiEnricher, DEFAULT_CONCURRENCY};
use crate::session::FilterSession;

#[derive(Parser)]
#[command(
    name = "cooper",
    about = "SAP script catalog: cascading facet filters and test-script enrichment"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enrich a test-script workbook and write the result as CSV
    Enrich {
        /// Input workbook (.xlsx)
        #[arg(long)]
        input: PathBuf,

        /// Output CSV path (default: sap_enriched_<timestamp>.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Parallel enrichment workers
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },

    /// Filter a dataset by facet selections and export the visible rows
    Filter {
        /// Dataset file (JSON)
        #[arg(long)]
        dataset: PathBuf,

        /// Use the full variant with script-detail columns
        #[arg(long)]
        with_scripts: bool,

        /// Facet selection, e.g. --select workstream=Manufacturing
        /// or --select country=USA,Germany (repeatable)
        #[arg(long = "select", value_name = "FACET=VALUES")]
        selections: Vec<String>,

        /// Output CSV path (default: Scripts_<timestamp>.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Enrich {
            input,
            output,
            concurrency,
        } => run_enrich(input, output, concurrency),
        Command::Filter {
            dataset,
            with_scripts,
            selections,
            output,
        } => run_filter(dataset, with_scripts, selections, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run_enrich(
    input: PathBuf,
    output: Option<PathBuf>,
    concurrency: usize,
) -> Result<(), String> {
    let config = EnrichmentConfig::from_env().map_err(|e| e.to_string())?;
    let cases = read_cases(&input).map_err(|e| e.to_string())?;
    if cases.is_empty() {
        log::warn!("No cases found in {}", input.display());
    } else {
        log::info!("Enriching {} cases from {}", cases.len(), input.display());
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let service = Arc::new(OpenAiEnricher::new(config));
    let enriched = runtime.block_on(enrich_cases(service, cases, concurrency));

    let path = output.unwrap_or_else(|| PathBuf::from(export_filename("sap_enriched")));
    fs::write(&path, cases_to_csv(&enriched))
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn run_filter(
    dataset: PathBuf,
    with_scripts: bool,
    selections: Vec<String>,
    output: Option<PathBuf>,
) -> Result<(), String> {
    let store = load_store(&dataset)?;
    let mut session = FilterSession::new(store, FacetConfig::sap_scripts());
    if with_scripts {
        session.set_variant(DatasetVariant::WithScripts);
    }

    let mut parsed = Vec::with_capacity(selections.len());
    for raw in &selections {
        let (facet_id, values) = parse_selection(raw)?;
        if session.config().get(&facet_id).is_none() {
            let known: Vec<&str> = session
                .config()
                .facets()
                .iter()
                .map(|f| f.id.as_str())
                .collect();
            return Err(format!(
                "Unknown facet '{}'; known facets: {}",
                facet_id,
                known.join(", ")
            ));
        }
        parsed.push((facet_id, values));
    }

    // Apply in cascade order so a later argument does not clear an
    // earlier one.
    parsed.sort_by_key(|(id, _)| session.config().position(id).unwrap_or(usize::MAX));
    for (facet_id, values) in parsed {
        session.edit_facet(&facet_id, values);
    }
    session.apply_filters();

    let visible = session.visible_rows().len();
    log::info!("{} of {} rows match", visible, session.dataset().len());

    let csv = match session.export_visible() {
        Ok(csv) => csv,
        Err(InterchangeError::NothingToExport) => {
            log::warn!("Nothing to export.");
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    let path = output.unwrap_or_else(|| PathBuf::from(export_filename("Scripts")));
    fs::write(&path, csv).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Parses `facet=v1,v2` into a facet id and its selected values.
fn parse_selection(raw: &str) -> Result<(String, Vec<String>), String> {
    let (facet_id, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("Invalid selection '{}'; expected FACET=VALUES", raw))?;
    let values: Vec<String> = values
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    Ok((facet_id.trim().to_string(), values))
}

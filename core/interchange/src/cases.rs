//! FILENAME: core/interchange/src/cases.rs
//! PURPOSE: The case/step wire contract with the enrichment service.
//! CONTEXT: A case groups the steps of one test scenario. These types are
//! what gets serialized to the enrichment service and what comes back;
//! the `mandatory_fields`/`output_fields` lists are empty on ingest and
//! populated (best effort) by enrichment.

use serde::{Deserialize, Serialize};

use crate::csv_writer::quote_field;

/// One step of a test scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub step_number: String,
    pub action: String,
    pub tcodes: String,
    pub sap_tcode_description: String,
    #[serde(default)]
    pub mandatory_fields: Vec<String>,
    #[serde(default)]
    pub output_fields: Vec<String>,
}

/// One test scenario with its ordered steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCase {
    #[serde(rename = "Case")]
    pub case: String,
    #[serde(rename = "Steps")]
    pub steps: Vec<ScriptStep>,
}

/// Column headers of the enriched-case CSV.
pub const CASE_CSV_HEADERS: &[&str] = &[
    "Scenario Name",
    "Step #",
    "Step Description",
    "Tcodes",
    "SAP Tcode Description",
    "Mandatory Fields",
    "Output Fields",
];

/// Flattens cases back into the seven-column CSV. List fields are joined
/// with "; ". The header line is always emitted, even for zero cases.
pub fn cases_to_csv(cases: &[ScriptCase]) -> String {
    let mut lines = vec![CASE_CSV_HEADERS.join(",")];
    for case in cases {
        for step in &case.steps {
            let fields = [
                case.case.as_str(),
                step.step_number.as_str(),
                step.action.as_str(),
                step.tcodes.as_str(),
                step.sap_tcode_description.as_str(),
                &step.mandatory_fields.join("; "),
                &step.output_fields.join("; "),
            ];
            lines.push(
                fields
                    .iter()
                    .map(|v| quote_field(v))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
    }
    lines.join("\r\n")
}

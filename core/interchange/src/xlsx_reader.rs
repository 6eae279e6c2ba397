//! FILENAME: core/interchange/src/xlsx_reader.rs
//! PURPOSE: Reads uploaded test-script workbooks into grouped cases.
//! CONTEXT: The first sheet's first row is the header. Data rows are
//! grouped by trimmed scenario name, preserving first-seen order; rows
//! with a blank scenario are skipped and missing cells load as empty
//! strings - malformed rows degrade, they are never rejected.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use crate::cases::{ScriptCase, ScriptStep};
use crate::error::InterchangeError;

/// Header names the uploaded workbook must carry.
const CASE_COLUMN: &str = "Scenario Name";
const STEP_COLUMN: &str = "Step #";
const DESC_COLUMN: &str = "Step Description";
const TCODE_COLUMN: &str = "tcodes";
const TCODE_DESC_COLUMN: &str = "sap_tcode_description";

/// Reads the first sheet of an xlsx workbook into cases grouped by
/// scenario name. A sheet with no data rows yields an empty list.
pub fn read_cases(path: &Path) -> Result<Vec<ScriptCase>, InterchangeError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names.first().ok_or(InterchangeError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(first_sheet)?;

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|c| cell_text(c).trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| InterchangeError::MissingColumn(name.to_string()))
    };
    let case_col = column(CASE_COLUMN)?;
    let step_col = column(STEP_COLUMN)?;
    let desc_col = column(DESC_COLUMN)?;
    let tcode_col = column(TCODE_COLUMN)?;
    let tcode_desc_col = column(TCODE_DESC_COLUMN)?;

    let steps = rows.filter_map(|row| {
        let cell = |idx: usize| row.get(idx).map(|c| cell_text(c).trim().to_string());
        let case = cell(case_col).unwrap_or_default();
        if case.is_empty() {
            return None;
        }
        Some((
            case,
            ScriptStep {
                step_number: cell(step_col).unwrap_or_default(),
                action: cell(desc_col).unwrap_or_default(),
                tcodes: cell(tcode_col).unwrap_or_default(),
                sap_tcode_description: cell(tcode_desc_col).unwrap_or_default(),
                mandatory_fields: Vec::new(),
                output_fields: Vec::new(),
            },
        ))
    });

    Ok(group_steps(steps))
}

/// Groups `(scenario, step)` pairs into cases, preserving the order in
/// which scenarios first appear.
pub fn group_steps<I>(steps: I) -> Vec<ScriptCase>
where
    I: IntoIterator<Item = (String, ScriptStep)>,
{
    let mut cases: Vec<ScriptCase> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (name, step) in steps {
        match index.get(&name) {
            Some(&i) => cases[i].steps.push(step),
            None => {
                index.insert(name.clone(), cases.len());
                cases.push(ScriptCase {
                    case: name,
                    steps: vec![step],
                });
            }
        }
    }
    cases
}

/// String form of a spreadsheet cell. Whole floats print without a
/// fractional part so step numbers read as "10", not "10.0".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

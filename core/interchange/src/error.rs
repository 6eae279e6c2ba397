//! FILENAME: core/interchange/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error("Nothing to export")]
    NothingToExport,
}

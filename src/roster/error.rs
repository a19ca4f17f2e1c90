use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not read roster '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not write roster '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not read workbook '{path}'")]
    ReadWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("could not write workbook '{path}'")]
    WriteWorkbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("workbook '{0}' has no worksheet")]
    NoWorksheet(PathBuf),
    #[error("unsupported roster format '{0}' (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat(PathBuf),
    #[error("roster '{0}' needs a header row and at least one data row")]
    Empty(PathBuf),
    #[error("no column matching '{0}' in roster header")]
    MissingColumn(String),
    #[error("invalid row range {start}..={end}: rows start at 2 (row 1 is the header) and end must not precede start")]
    InvalidRowRange { start: usize, end: usize },
    #[error("end row {end} exceeds the {total} rows of the roster")]
    RowOutOfRange { end: usize, total: usize },
}

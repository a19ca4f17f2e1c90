//! Roster files as rows of text cells, first row being the header.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, DataType, Reader};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::RosterError;

pub type Records = Vec<Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    /// `.xlsx` and legacy `.xls` inputs; results are always written as `.xlsx`.
    Workbook,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> Result<Self, RosterError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") | Some("xls") => Ok(Self::Workbook),
            _ => Err(RosterError::UnsupportedFormat(path.to_owned())),
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Workbook => "xlsx",
        }
    }
}

/// `<dir>/<stem>_processed.<ext>` next to the input roster.
pub fn processed_path(input: &Path) -> Result<PathBuf, RosterError> {
    let format = SheetFormat::from_path(input)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    Ok(input.with_file_name(format!("{stem}_processed.{}", format.extension())))
}

pub fn read_records(path: &Path) -> Result<Records, RosterError> {
    match SheetFormat::from_path(path)? {
        SheetFormat::Csv => read_csv(path),
        SheetFormat::Workbook => read_workbook(path),
    }
}

pub fn write_records(path: &Path, records: &[Vec<String>]) -> Result<(), RosterError> {
    match SheetFormat::from_path(path)? {
        SheetFormat::Csv => write_csv(path, records),
        SheetFormat::Workbook => write_workbook(path, records).map_err(|source| RosterError::WriteWorkbook {
            path: path.to_owned(),
            source,
        }),
    }
}

fn read_csv(path: &Path) -> Result<Records, RosterError> {
    let read_error = |source| RosterError::Read {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;

    reader
        .records()
        .map(|r| r.map(|record| record.iter().map(str::to_owned).collect::<Vec<_>>()))
        .collect::<Result<_, _>>()
        .map_err(read_error)
}

fn write_csv(path: &Path, records: &[Vec<String>]) -> Result<(), RosterError> {
    let write_error = |source| RosterError::Write {
        path: path.to_owned(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(write_error)?;

    for record in records {
        writer.write_record(record).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))
}

/// First worksheet only.
fn read_workbook(path: &Path) -> Result<Records, RosterError> {
    let read_error = |source| RosterError::ReadWorkbook {
        path: path.to_owned(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(read_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RosterError::NoWorksheet(path.to_owned()))?
        .map_err(read_error)?;

    Ok(range
        .rows()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_text).collect();
            while cells.last().map_or(false, String::is_empty) {
                cells.pop();
            }
            cells
        })
        .collect())
}

fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::Empty => String::new(),
        DataType::String(s) => s.clone(),
        DataType::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn write_workbook(path: &Path, records: &[Vec<String>]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.iter().enumerate() {
            if row == 0 {
                worksheet.write_with_format(row as u32, col as u16, value.as_str(), &header_format)?;
            } else {
                worksheet.write(row as u32, col as u16, value.as_str())?;
            }
        }
    }
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::{processed_path, read_records, write_records, RosterError, SheetFormat};

    #[test]
    fn test_sheet_format_from_path() {
        assert_eq!(SheetFormat::from_path(Path::new("a.CSV")).unwrap(), SheetFormat::Csv);
        assert_eq!(SheetFormat::from_path(Path::new("a.xlsx")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_path(Path::new("a.xls")).unwrap(), SheetFormat::Workbook);
        assert_matches!(
            SheetFormat::from_path(Path::new("a.ods")),
            Err(RosterError::UnsupportedFormat(_))
        );
    }

    #[test]
    fn test_processed_path() {
        assert_eq!(
            processed_path(Path::new("data/class-a.csv")).unwrap(),
            Path::new("data/class-a_processed.csv")
        );
        assert_eq!(
            processed_path(Path::new("class-b.xls")).unwrap(),
            Path::new("class-b_processed.xlsx")
        );
    }

    #[test]
    fn test_workbook_records_survive_a_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");
        let records = vec![
            vec!["name".to_string(), "repository".to_string()],
            vec!["Alice".to_string(), "https://github.com/alice/repo".to_string()],
            vec!["Bob".to_string()],
        ];

        write_records(&path, &records).unwrap();

        assert_eq!(read_records(&path).unwrap(), records);
    }
}

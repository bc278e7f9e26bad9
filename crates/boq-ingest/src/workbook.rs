use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook};
use tracing::debug;

use boq_model::{Cell, RawTable};

use crate::IngestError;

/// An opened spreadsheet, decoder chosen by file extension.
pub enum Workbook {
    Xls(Xls<BufReader<File>>),
    Xlsx(Xlsx<BufReader<File>>),
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Workbook::Xls(_) => f.write_str("Workbook::Xls"),
            Workbook::Xlsx(_) => f.write_str("Workbook::Xlsx"),
        }
    }
}

impl Workbook {
    /// Open a workbook, dispatching on the (case-insensitive) file
    /// extension. Unrecognized extensions fail before any I/O happens.
    pub fn open(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xls" => Ok(Workbook::Xls(open_workbook(path)?)),
            "xlsx" => Ok(Workbook::Xlsx(open_workbook(path)?)),
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }

    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Workbook::Xls(wb) => wb.sheet_names().to_vec(),
            Workbook::Xlsx(wb) => wb.sheet_names().to_vec(),
        }
    }

    /// Read one sheet: the row at index `skip_rows` becomes the header
    /// row (names trimmed), everything after it becomes data.
    pub fn read_sheet(&mut self, sheet: &str, skip_rows: usize) -> Result<RawTable, IngestError> {
        if !self.sheet_names().iter().any(|name| name == sheet) {
            return Err(IngestError::SheetNotFound(sheet.to_string()));
        }
        let range = match self {
            Workbook::Xls(wb) => wb.worksheet_range(sheet)?,
            Workbook::Xlsx(wb) => wb.worksheet_range(sheet)?,
        };
        build_raw_table(&range, sheet, skip_rows)
    }
}

fn build_raw_table(
    range: &Range<Data>,
    sheet: &str,
    skip_rows: usize,
) -> Result<RawTable, IngestError> {
    let total_rows = range.height();
    if skip_rows >= total_rows {
        return Err(IngestError::SkipBeyondEnd {
            sheet: sheet.to_string(),
            skip_rows,
            total_rows,
        });
    }

    let mut rows_iter = range.rows().skip(skip_rows);
    let Some(header_row) = rows_iter.next() else {
        return Err(IngestError::SkipBeyondEnd {
            sheet: sheet.to_string(),
            skip_rows,
            total_rows,
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&data_to_cell(cell).to_display_string()))
        .collect();

    let rows: Vec<Vec<Cell>> = rows_iter
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    debug!(
        sheet,
        skip_rows,
        columns = headers.len(),
        rows = rows.len(),
        "decoded sheet"
    );
    Ok(RawTable::new(headers, rows))
}

/// Trim a raw header: drop a stray BOM and collapse surrounding and
/// inner whitespace runs (full-width spaces included).
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#ERROR: {e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("  項次  "), "項次");
        assert_eq!(normalize_header("\u{feff}單位"), "單位");
        assert_eq!(normalize_header("項目及　說明"), "項目及 說明");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn unsupported_extension_is_rejected_before_io() {
        let err = Workbook::open(Path::new("estimate.csv")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension } if extension == "csv"
        ));
        // no extension at all
        let err = Workbook::open(Path::new("estimate")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { ref extension } if extension.is_empty()
        ));
    }

    #[test]
    fn cells_keep_their_source_type() {
        assert_eq!(data_to_cell(&Data::String("喬木".to_string())), Cell::Text("喬木".to_string()));
        assert_eq!(data_to_cell(&Data::Float(1.329)), Cell::Number(1.329));
        assert_eq!(data_to_cell(&Data::Int(6)), Cell::Number(6.0));
        assert_eq!(data_to_cell(&Data::Empty), Cell::Empty);
    }
}

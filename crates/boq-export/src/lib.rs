//! Turns the retained selection into a downloadable pick-list CSV.
//!
//! The export is a pick-list, not a priced estimate: pricing and
//! quantity columns inherited from the source workbook are dropped,
//! and internal bookkeeping (ranks, sort keys) is never serialized in
//! the first place. Output is UTF-8 with a byte-order mark so common
//! spreadsheet importers pick the encoding up.

#![deny(unsafe_code)]

use thiserror::Error;
use tracing::debug;

use boq_model::{COL_DESCRIPTION, COL_ID, COL_UNIT, DROPPED_EXPORT_COLUMNS, SelectedRow};

/// Download filename, literally "retained work items".
pub const EXPORT_FILE_NAME: &str = "保留工項.csv";
/// MIME type of the download.
pub const EXPORT_MIME: &str = "text/csv";

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV 編碼失敗：{0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Header of the flat table: the canonical columns, then whatever
/// extra source columns the rows carry (first-seen order), minus the
/// bookkeeping set.
pub fn export_columns(rows: &[SelectedRow]) -> Vec<String> {
    let mut columns = vec![
        COL_ID.to_string(),
        COL_DESCRIPTION.to_string(),
        COL_UNIT.to_string(),
    ];
    for row in rows {
        for name in row.extras.keys() {
            if DROPPED_EXPORT_COLUMNS.contains(&name.as_str()) {
                continue;
            }
            if !columns.iter().any(|column| column == name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}

/// The selection as a flat table: header plus one record per row, with
/// empty strings where a row lacks an extra column.
pub fn to_records(rows: &[SelectedRow]) -> (Vec<String>, Vec<Vec<String>>) {
    let columns = export_columns(rows);
    let records = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match column.as_str() {
                    COL_ID => row.id.clone(),
                    COL_DESCRIPTION => row.description.clone(),
                    COL_UNIT => row.unit.clone(),
                    other => row.extras.get(other).cloned().unwrap_or_default(),
                })
                .collect()
        })
        .collect();
    (columns, records)
}

/// Serialize the selection: BOM, header row, comma-separated records.
pub fn format_csv(rows: &[SelectedRow]) -> Result<Vec<u8>, ExportError> {
    let (header, records) = to_records(rows);
    let mut buffer = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(&header)?;
        for record in &records {
            writer.write_record(record)?;
        }
        writer.flush()?;
    }
    debug!(rows = rows.len(), bytes = buffer.len(), "selection encoded");
    Ok(buffer)
}

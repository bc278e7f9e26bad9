#![deny(unsafe_code)]

use crate::Cell;

/// A decoded sheet: normalized headers plus loosely typed data rows.
///
/// Headers are whitespace-trimmed by the loader; data rows all have the
/// same width as the header row. This is the input to column binding.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a header by exact name; first match wins when the
    /// source sheet carries duplicate headers.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_finds_first_match() {
        let table = RawTable::new(
            vec!["項次".to_string(), "單位".to_string(), "單位".to_string()],
            vec![],
        );
        assert_eq!(table.column_index("單位"), Some(1));
        assert_eq!(table.column_index("沒有這欄"), None);
    }
}

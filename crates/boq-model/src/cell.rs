#![deny(unsafe_code)]

use std::fmt;

/// A loosely typed spreadsheet cell as delivered by the workbook decoder.
///
/// Spreadsheet engines hand back typed values (text, floats, blanks);
/// the mapping layer decides per canonical field how to coerce them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// True for cells with no value in the source sheet.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Render the cell the way a spreadsheet user reads it.
    ///
    /// Integral floats lose the trailing fraction (`3.0` → `"3"`,
    /// `1.329` → `"1.329"`) so numeric-looking ids survive the string
    /// coercion without picking up a spurious `.0`.
    pub fn to_display_string(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Empty => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

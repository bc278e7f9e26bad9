use std::collections::BTreeMap;

use tracing::debug;

use boq_model::{Cell, PlantItem, PlantTable, RawTable, ReadyTable, WorkItem};

use crate::{BindingError, ItemBindings, PlantBindings};

/// Bind and canonicalize the item table.
///
/// Rows with a missing id or description are dropped; descriptions lose
/// their full-width spaces and get trimmed; ids are coerced to string
/// form so numeric-looking and text ids behave alike downstream. The
/// unbound columns of each surviving row ride along as `extras`.
pub fn map_items(raw: &RawTable, bindings: &ItemBindings) -> Result<ReadyTable, BindingError> {
    bindings.validate(raw)?;
    let id_col = column(raw, &bindings.id)?;
    let desc_col = column(raw, &bindings.description)?;
    let unit_col = column(raw, &bindings.unit)?;
    let bound = [id_col, desc_col, unit_col];

    let mut items = Vec::new();
    let mut dropped = 0usize;
    for row in &raw.rows {
        let id_cell = cell_at(row, id_col);
        let desc_cell = cell_at(row, desc_col);
        if id_cell.is_empty() || desc_cell.is_empty() {
            dropped += 1;
            continue;
        }
        let mut extras = BTreeMap::new();
        for (index, header) in raw.headers.iter().enumerate() {
            if bound.contains(&index) || header.is_empty() {
                continue;
            }
            let cell = cell_at(row, index);
            if !cell.is_empty() {
                extras.insert(header.clone(), cell.to_display_string());
            }
        }
        items.push(WorkItem {
            id: id_cell.to_display_string().trim().to_string(),
            description: normalize_description(&desc_cell.to_display_string()),
            unit: cell_at(row, unit_col).to_display_string(),
            extras,
        });
    }

    if items.is_empty() {
        return Err(BindingError::NoUsableRows);
    }
    debug!(rows = items.len(), dropped, "mapped item table");
    Ok(ReadyTable { items })
}

/// Bind and canonicalize the planting table. Rows missing any of the
/// three bound fields are dropped; the group must coerce to an integer.
pub fn map_plants(raw: &RawTable, bindings: &PlantBindings) -> Result<PlantTable, BindingError> {
    bindings.validate(raw)?;
    let group_col = column(raw, &bindings.group)?;
    let spec_col = column(raw, &bindings.spec)?;
    let variety_col = column(raw, &bindings.variety)?;

    let mut plants = Vec::new();
    let mut dropped = 0usize;
    for (row_index, row) in raw.rows.iter().enumerate() {
        let group_cell = cell_at(row, group_col);
        let spec_cell = cell_at(row, spec_col);
        let variety_cell = cell_at(row, variety_col);
        if group_cell.is_empty() || spec_cell.is_empty() || variety_cell.is_empty() {
            dropped += 1;
            continue;
        }
        let group = coerce_group(group_cell).ok_or_else(|| BindingError::InvalidGroup {
            // 1-based, counted from the first data row
            row: row_index + 1,
            value: group_cell.to_display_string(),
        })?;
        plants.push(PlantItem {
            group,
            spec: spec_cell.to_display_string(),
            variety: variety_cell.to_display_string(),
        });
    }

    if plants.is_empty() {
        return Err(BindingError::NoUsableRows);
    }
    debug!(rows = plants.len(), dropped, "mapped planting table");
    Ok(PlantTable { plants })
}

fn column(raw: &RawTable, name: &str) -> Result<usize, BindingError> {
    raw.column_index(name)
        .ok_or_else(|| BindingError::UnknownColumn(name.to_string()))
}

fn cell_at(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&Cell::Empty)
}

/// Remove full-width spaces entirely, then trim the ordinary ones.
fn normalize_description(raw: &str) -> String {
    raw.replace('\u{3000}', "").trim().to_string()
}

fn coerce_group(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Number(n) if n.fract() == 0.0 => Some(*n as i64),
        Cell::Number(_) => None,
        Cell::Text(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        Cell::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_cleanup_removes_ideographic_spaces() {
        assert_eq!(normalize_description("　喬木　移植 "), "喬木移植");
        assert_eq!(normalize_description("  技術工"), "技術工");
    }

    #[test]
    fn group_coercion_accepts_integral_forms_only() {
        assert_eq!(coerce_group(&Cell::Number(33.0)), Some(33));
        assert_eq!(coerce_group(&Cell::Text(" 33 ".to_string())), Some(33));
        assert_eq!(coerce_group(&Cell::Text("33.0".to_string())), Some(33));
        assert_eq!(coerce_group(&Cell::Number(33.5)), None);
        assert_eq!(coerce_group(&Cell::Text("甲".to_string())), None);
    }
}

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::SelectionKey;

/// Canonical column: item number (項次).
pub const COL_ID: &str = "項次";
/// Canonical column: item description (項目及說明).
pub const COL_DESCRIPTION: &str = "項目及說明";
/// Canonical column: unit of measure (單位).
pub const COL_UNIT: &str = "單位";
/// Unit assigned to planting rows when they enter the selection (株).
pub const PLANT_UNIT: &str = "株";

/// Source-workbook columns never serialized into the export: the
/// pick-list deliberately drops quantities and pricing.
pub const DROPPED_EXPORT_COLUMNS: [&str; 4] = ["數量", "單價", "複價", "備註"];

/// An id written as `1.NNN` is a chapter-qualified analysis id; the
/// selection stores the bare `NNN`. Anything else passes through.
pub fn strip_chapter_prefix(id: &str) -> &str {
    id.strip_prefix("1.").unwrap_or(id)
}

/// One priced line of the bill-of-quantities table after column
/// binding. `extras` carries the unbound source columns (quantities,
/// prices, remarks) through to the export step, which drops the
/// bookkeeping ones.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: String,
    pub description: String,
    pub unit: String,
    pub extras: BTreeMap<String, String>,
}

impl WorkItem {
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::for_item(strip_chapter_prefix(&self.id), &self.description)
    }

    /// The row as it enters the selection store, chapter prefix
    /// stripped from the id.
    pub fn to_selected(&self) -> SelectedRow {
        SelectedRow {
            id: strip_chapter_prefix(&self.id).to_string(),
            description: self.description.clone(),
            unit: self.unit.clone(),
            extras: self.extras.clone(),
        }
    }
}

/// One record of the planting specification table.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantItem {
    pub group: i64,
    pub spec: String,
    pub variety: String,
}

impl PlantItem {
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::for_plant(self.group, &self.variety)
    }

    /// Work-item-shaped form of a planting row: the group number as id,
    /// variety and spec joined into the description, unit fixed to 株.
    pub fn to_selected(&self) -> SelectedRow {
        SelectedRow {
            id: self.group.to_string(),
            description: format!("{}，{}", self.variety, self.spec),
            unit: PLANT_UNIT.to_string(),
            extras: BTreeMap::new(),
        }
    }
}

/// A row held by the selection store, already in export shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    pub id: String,
    pub description: String,
    pub unit: String,
    pub extras: BTreeMap<String, String>,
}

/// The confirmed item table: what keyword queries run against.
#[derive(Debug, Clone, Default)]
pub struct ReadyTable {
    pub items: Vec<WorkItem>,
}

impl ReadyTable {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The confirmed planting table.
#[derive(Debug, Clone, Default)]
pub struct PlantTable {
    pub plants: Vec<PlantItem>,
}

impl PlantTable {
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_prefix_is_stripped_only_once() {
        assert_eq!(strip_chapter_prefix("1.329"), "329");
        assert_eq!(strip_chapter_prefix("329"), "329");
        assert_eq!(strip_chapter_prefix("分析表33"), "分析表33");
        // only a leading "1." is chapter-qualified
        assert_eq!(strip_chapter_prefix("2.14"), "2.14");
    }

    #[test]
    fn plant_converts_to_work_item_shape() {
        let plant = PlantItem {
            group: 33,
            spec: "H2.5m".to_string(),
            variety: "樟樹".to_string(),
        };
        let row = plant.to_selected();
        assert_eq!(row.id, "33");
        assert_eq!(row.description, "樟樹，H2.5m");
        assert_eq!(row.unit, PLANT_UNIT);
        assert!(row.extras.is_empty());
    }

    #[test]
    fn selected_item_uses_stripped_id() {
        let item = WorkItem {
            id: "1.329".to_string(),
            description: "技術工".to_string(),
            unit: "工".to_string(),
            extras: BTreeMap::new(),
        };
        assert_eq!(item.to_selected().id, "329");
        assert_eq!(item.selection_key(), SelectionKey::for_item("329", "技術工"));
    }
}

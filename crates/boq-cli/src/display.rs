//! comfy-table rendering of the picker's tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, ContentArrangement, Table};

use boq_export::to_records;
use boq_model::{PlantItem, RawTable, SelectedRow, WorkItem, strip_chapter_prefix};
use boq_select::ItemMatch;

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_sheet_list(names: &[String]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "工作表"]);
    apply_table_style(&mut table);
    for (index, name) in names.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(name)]);
    }
    println!("{table}");
}

pub fn print_headers(headers: &[String]) {
    println!("📋 欄位名稱：{}", headers.join("、"));
}

/// First rows of the decoded sheet, so the user can sanity-check the
/// skip-rows count before binding columns.
pub fn print_preview(raw: &RawTable, limit: usize) {
    let mut table = Table::new();
    table.set_header(raw.headers.clone());
    apply_table_style(&mut table);
    for row in raw.rows.iter().take(limit) {
        table.add_row(row.iter().map(|cell| cell.to_display_string()));
    }
    println!("👀 原始資料預覽：");
    println!("{table}");
}

pub fn print_matches(matches: &[ItemMatch]) {
    let mut table = Table::new();
    table.set_header(vec!["項次", "項目及說明", "單位"]);
    apply_table_style(&mut table);
    for m in matches {
        table.add_row(vec![
            strip_chapter_prefix(&m.item.id),
            m.item.description.as_str(),
            m.item.unit.as_str(),
        ]);
    }
    println!("{table}");
}

pub fn print_plants(plants: &[PlantItem]) {
    let mut table = Table::new();
    table.set_header(vec!["群組", "品種", "規格"]);
    apply_table_style(&mut table);
    for plant in plants {
        table.add_row(vec![
            Cell::new(plant.group),
            Cell::new(&plant.variety),
            Cell::new(&plant.spec),
        ]);
    }
    println!("{table}");
}

/// The retained selection, in export order and export shape.
pub fn print_selection(rows: &[SelectedRow]) {
    let (header, records) = to_records(rows);
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(record);
    }
    println!("{table}");
}

pub fn print_samples(samples: &[String]) {
    for sample in samples {
        println!("　{sample}");
    }
}

/// Checkbox label of an item row: `項次｜項目及說明`, chapter prefix
/// stripped the way the row will be stored.
pub fn item_label(item: &WorkItem) -> String {
    format!("{}｜{}", strip_chapter_prefix(&item.id), item.description)
}

/// Checkbox label of a planting row: `群組｜品種，規格`.
pub fn plant_label(plant: &PlantItem) -> String {
    format!("{}｜{}，{}", plant.group, plant.variety, plant.spec)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn labels_match_the_stored_row_forms() {
        let item = WorkItem {
            id: "1.329".to_string(),
            description: "技術工".to_string(),
            unit: "工".to_string(),
            extras: BTreeMap::new(),
        };
        assert_eq!(item_label(&item), "329｜技術工");

        let plant = PlantItem {
            group: 33,
            spec: "H2.5m".to_string(),
            variety: "樟樹".to_string(),
        };
        assert_eq!(plant_label(&plant), "33｜樟樹，H2.5m");
    }
}

//! dialoguer prompt wrappers. Every interaction goes through here so
//! the command layer stays a readable sequence of steps.

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

use boq_map::{ItemBindings, PlantBindings};

/// What the user picked from the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    QueryItems,
    QueryPlants,
    ShowSelection,
    Export,
    Reset,
    Quit,
}

pub fn main_menu(has_plants: bool, selected: usize) -> Result<MenuAction> {
    let mut labels = vec!["🚧 工項關鍵字查詢".to_string()];
    let mut actions = vec![MenuAction::QueryItems];
    if has_plants {
        labels.push("🌸 植栽規格查詢".to_string());
        actions.push(MenuAction::QueryPlants);
    }
    labels.push(format!("✅ 檢視已保留（{selected} 筆）"));
    actions.push(MenuAction::ShowSelection);
    labels.push("📥 匯出 保留工項.csv".to_string());
    actions.push(MenuAction::Export);
    labels.push("🔁 重新查詢/清除勾選".to_string());
    actions.push(MenuAction::Reset);
    labels.push("👋 離開".to_string());
    actions.push(MenuAction::Quit);

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇動作")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[index])
}

pub fn choose_sheet(prompt: &str, names: &[String]) -> Result<String> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(names)
        .default(0)
        .interact()?;
    Ok(names[index].clone())
}

pub fn prompt_skip_rows(prompt: &str, default: usize) -> Result<usize> {
    Ok(Input::<usize>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_text()?)
}

fn choose_column(prompt: &str, headers: &[String]) -> Result<String> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(headers)
        .default(0)
        .interact()?;
    Ok(headers[index].clone())
}

pub fn item_bindings(headers: &[String]) -> Result<ItemBindings> {
    println!("📌 請對應主表欄位");
    Ok(ItemBindings {
        id: choose_column("🔢 項次欄", headers)?,
        description: choose_column("🔖 項目及說明欄", headers)?,
        unit: choose_column("📏 單位欄", headers)?,
    })
}

pub fn plant_bindings(headers: &[String]) -> Result<PlantBindings> {
    println!("📌 請對應植栽表欄位");
    Ok(PlantBindings {
        group: choose_column("🔢 群組欄", headers)?,
        spec: choose_column("🔖 規格說明欄", headers)?,
        variety: choose_column("🌿 品種欄", headers)?,
    })
}

pub fn query_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// The checkbox list. `defaults` is derived from the selection store on
/// every render, which is what keeps toggling idempotent across
/// repeated views of the same rows.
pub fn toggle_rows(labels: &[String], defaults: &[bool]) -> Result<Vec<usize>> {
    Ok(MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("空白鍵切換勾選，Enter 確認")
        .items(labels)
        .defaults(defaults)
        .interact()?)
}

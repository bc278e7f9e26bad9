//! Interactive session orchestration: load → bind → query loop.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, warn};

use boq_export::{EXPORT_FILE_NAME, format_csv};
use boq_ingest::Workbook;
use boq_map::{BindingsFile, ItemBindings, PlantBindings, map_items, map_plants};
use boq_model::{PlantTable, ReadyTable};
use boq_select::{
    EmptyQueryPolicy, FilterOutcome, Session, SortOrder, filter_items, filter_plants, split_terms,
};

use crate::cli::{QueryArgs, SheetsArgs};
use crate::display;
use crate::prompts;
use crate::prompts::MenuAction;

/// Priced unit-price analysis sheets usually carry a six-row preamble.
const DEFAULT_MAIN_SKIP_ROWS: usize = 6;
const DEFAULT_PLANT_SKIP_ROWS: usize = 0;

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let workbook = Workbook::open(&args.workbook)
        .with_context(|| format!("開啟 {} 失敗", args.workbook.display()))?;
    display::print_sheet_list(&workbook.sheet_names());
    Ok(())
}

pub fn run_query(args: &QueryArgs) -> Result<()> {
    let bindings = load_bindings_file(args.bindings.as_deref())?;
    let mut session = Session::new();

    let ready = load_item_table(
        &args.workbook,
        args.skip_rows.unwrap_or(DEFAULT_MAIN_SKIP_ROWS),
        bindings.items.as_ref(),
    )?;
    println!("✅ 主表就緒，共 {} 筆工項", ready.len());
    session.set_ready(ready);

    // the planting workbook is fully independent: a failure here leaves
    // the item path usable
    if let Some(plant_path) = args.plant.as_deref() {
        match load_plant_table(
            plant_path,
            args.plant_skip_rows.unwrap_or(DEFAULT_PLANT_SKIP_ROWS),
            bindings.plants.as_ref(),
        ) {
            Ok(table) => {
                println!("🌱 植栽表就緒，共 {} 筆", table.len());
                session.set_plants(table);
            }
            Err(error) => {
                warn!(%error, "planting workbook skipped");
                eprintln!("⚠ 植栽表讀取失敗：{error:#}（略過植栽查詢）");
            }
        }
    }

    loop {
        match prompts::main_menu(session.plants().is_some(), session.selection().len())? {
            MenuAction::QueryItems => query_items(&mut session)?,
            MenuAction::QueryPlants => query_plants(&mut session)?,
            MenuAction::ShowSelection => show_selection(&session),
            MenuAction::Export => export_selection(&session, &args.output)?,
            MenuAction::Reset => {
                session.reset();
                println!("🔁 已清除所有勾選");
            }
            MenuAction::Quit => break,
        }
    }
    Ok(())
}

fn load_bindings_file(path: Option<&Path>) -> Result<BindingsFile> {
    let Some(path) = path else {
        return Ok(BindingsFile::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("讀取對應檔 {} 失敗", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("解析對應檔 {} 失敗", path.display()))
}

/// Load and bind the main table. Decode and binding errors are shown
/// and the whole step re-runs, so the user can fix the sheet choice,
/// the skip count or the bindings without restarting the session.
fn load_item_table(
    path: &Path,
    default_skip: usize,
    bound: Option<&ItemBindings>,
) -> Result<ReadyTable> {
    loop {
        match try_load_item_table(path, default_skip, bound) {
            Ok(table) => return Ok(table),
            Err(error) => {
                eprintln!("❌ 主表讀取失敗：{error:#}");
                if !prompts::confirm("重新選擇工作表／欄位？", true)? {
                    bail!("主表載入中止");
                }
            }
        }
    }
}

fn try_load_item_table(
    path: &Path,
    default_skip: usize,
    bound: Option<&ItemBindings>,
) -> Result<ReadyTable> {
    let mut workbook = Workbook::open(path)?;
    let sheet = prompts::choose_sheet("請選擇單價分析工作表", &workbook.sheet_names())?;
    let skip_rows = prompts::prompt_skip_rows("要跳過主表前幾列？（通常是 6～7 列）", default_skip)?;
    let raw = workbook.read_sheet(&sheet, skip_rows)?;
    display::print_headers(&raw.headers);
    display::print_preview(&raw, 5);
    let bindings = match bound {
        Some(bindings) => {
            bindings.validate(&raw)?;
            bindings.clone()
        }
        None => prompts::item_bindings(&raw.headers)?,
    };
    let ready = map_items(&raw, &bindings)?;
    info!(sheet = %sheet, skip_rows, rows = ready.len(), "item table confirmed");
    Ok(ready)
}

fn load_plant_table(
    path: &Path,
    default_skip: usize,
    bound: Option<&PlantBindings>,
) -> Result<PlantTable> {
    let mut workbook = Workbook::open(path)?;
    let sheet = prompts::choose_sheet("請選擇植栽表工作表", &workbook.sheet_names())?;
    let skip_rows = prompts::prompt_skip_rows("要跳過植栽表前幾列？", default_skip)?;
    let raw = workbook.read_sheet(&sheet, skip_rows)?;
    display::print_headers(&raw.headers);
    display::print_preview(&raw, 5);
    let bindings = match bound {
        Some(bindings) => {
            bindings.validate(&raw)?;
            bindings.clone()
        }
        None => prompts::plant_bindings(&raw.headers)?,
    };
    let plants = map_plants(&raw, &bindings)?;
    info!(sheet = %sheet, skip_rows, rows = plants.len(), "planting table confirmed");
    Ok(plants)
}

fn query_items(session: &mut Session) -> Result<()> {
    let input = prompts::query_text("🔍 查詢工項關鍵字（可用 , 、 ， 分隔）")?;
    let terms = split_terms(&input);
    let by_input = prompts::confirm("依輸入順序排列？", false)?;
    let order = if by_input {
        SortOrder::ByInput
    } else {
        SortOrder::ByNumericKey
    };

    // this entry point shows the whole table on an empty query
    let outcome = {
        let ready = session.ready().ok_or_else(|| anyhow!("主表尚未就緒"))?;
        filter_items(ready, &terms, order, EmptyQueryPolicy::All)
    };
    match outcome {
        FilterOutcome::NoMatches { samples } => {
            println!("⚠ 沒有找到符合的工項，請檢查關鍵字或欄位對應是否正確");
            println!("💡 可搜尋的項目包括：");
            display::print_samples(&samples);
        }
        FilterOutcome::Matches(matches) => {
            println!("共找到 {} 筆資料，請勾選保留：", matches.len());
            display::print_matches(&matches);
            let labels: Vec<String> = matches
                .iter()
                .map(|m| display::item_label(&m.item))
                .collect();
            let defaults: Vec<bool> = matches
                .iter()
                .map(|m| session.selection().is_selected(&m.item.selection_key()))
                .collect();
            let picked: HashSet<usize> =
                prompts::toggle_rows(&labels, &defaults)?.into_iter().collect();
            for (index, m) in matches.iter().enumerate() {
                session.selection_mut().toggle(
                    m.item.selection_key(),
                    m.item.to_selected(),
                    picked.contains(&index),
                );
            }
        }
    }
    Ok(())
}

fn query_plants(session: &mut Session) -> Result<()> {
    let input = prompts::query_text("🔍 搜尋植栽關鍵字（可用 , 、 ， 分隔）")?;
    let terms = split_terms(&input);

    // this entry point previews the first rows on an empty query
    let plants = {
        let table = session.plants().ok_or_else(|| anyhow!("植栽表尚未就緒"))?;
        filter_plants(table, &terms)
    };
    if plants.is_empty() {
        println!("⚠ 沒有符合的植栽，請檢查關鍵字");
        return Ok(());
    }
    println!("共找到 {} 筆植栽，請勾選保留：", plants.len());
    display::print_plants(&plants);
    let labels: Vec<String> = plants.iter().map(display::plant_label).collect();
    let defaults: Vec<bool> = plants
        .iter()
        .map(|plant| session.selection().is_selected(&plant.selection_key()))
        .collect();
    let picked: HashSet<usize> = prompts::toggle_rows(&labels, &defaults)?.into_iter().collect();
    for (index, plant) in plants.iter().enumerate() {
        session.selection_mut().toggle(
            plant.selection_key(),
            plant.to_selected(),
            picked.contains(&index),
        );
    }
    Ok(())
}

fn show_selection(session: &Session) {
    let rows = session.selection().export();
    if rows.is_empty() {
        println!("尚未選取任何工項");
        return;
    }
    println!("✅ 你保留的工項：");
    display::print_selection(&rows);
}

fn export_selection(session: &Session, output_dir: &Path) -> Result<()> {
    let rows = session.selection().export();
    if rows.is_empty() {
        println!("尚未選取任何工項");
        return Ok(());
    }
    display::print_selection(&rows);
    let bytes = format_csv(&rows).context("編碼 CSV 失敗")?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("建立輸出目錄 {} 失敗", output_dir.display()))?;
    let path = output_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, &bytes).with_context(|| format!("寫入 {} 失敗", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "selection exported");
    println!("📥 已匯出 {} 筆至 {}", rows.len(), path.display());
    Ok(())
}

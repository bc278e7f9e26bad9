use std::collections::BTreeMap;

use tracing::debug;

use boq_model::{SelectedRow, SelectionKey, export_key, pure_numeric_id};

/// The retained selection: one entry per [`SelectionKey`], no
/// tombstones. Toggling is an idempotent involution — replaying the
/// same checkbox state any number of times lands in the same store
/// state, which is what makes re-rendering a filtered view safe.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    entries: BTreeMap<SelectionKey, SelectedRow>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one checkbox state: checked inserts (or overwrites), an
    /// unchecked key is removed if present and a no-op otherwise.
    pub fn toggle(&mut self, key: SelectionKey, row: SelectedRow, checked: bool) {
        if checked {
            self.entries.insert(key, row);
        } else {
            self.entries.remove(&key);
        }
    }

    pub fn is_selected(&self, key: &SelectionKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry. Checkbox defaults are derived from the store
    /// on each render, so after this all rows render unchecked.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        debug!(dropped, "selection cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The selection in export order: ascending by the id's leading
    /// digit run (0 when absent), each id rewritten to its pure-numeric
    /// form where one exists.
    pub fn export(&self) -> Vec<SelectedRow> {
        let mut rows: Vec<SelectedRow> = self.entries.values().cloned().collect();
        rows.sort_by_key(|row| export_key(&row.id));
        for row in &mut rows {
            if let Some(pure) = pure_numeric_id(&row.id) {
                row.id = pure;
            }
        }
        rows
    }
}

use boq_model::{PlantTable, ReadyTable};

use crate::SelectionStore;

/// Session-scoped state: the confirmed tables and the retained
/// selection. Created empty, populated on explicit confirmation,
/// cleared by reset or session end — no ambient globals.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ready: Option<ReadyTable>,
    plants: Option<PlantTable>,
    selection: SelectionStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&self) -> Option<&ReadyTable> {
        self.ready.as_ref()
    }

    pub fn plants(&self) -> Option<&PlantTable> {
        self.plants.as_ref()
    }

    /// Install a freshly confirmed item table. Retained selections
    /// belong to the previous table, so they are dropped with it.
    pub fn set_ready(&mut self, table: ReadyTable) {
        self.ready = Some(table);
        self.selection.clear();
    }

    /// Install the planting table. Independent of the item table and
    /// of the current selection.
    pub fn set_plants(&mut self, table: PlantTable) {
        self.plants = Some(table);
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionStore {
        &mut self.selection
    }

    /// The explicit reset action: keep the tables, drop the selection.
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use boq_model::{SelectedRow, SelectionKey, WorkItem};

    use super::*;

    fn work_item(id: &str, description: &str) -> WorkItem {
        WorkItem {
            id: id.to_string(),
            description: description.to_string(),
            unit: "工".to_string(),
            extras: BTreeMap::new(),
        }
    }

    fn select(session: &mut Session, key: SelectionKey, row: SelectedRow) {
        session.selection_mut().toggle(key, row, true);
    }

    #[test]
    fn confirming_a_new_table_drops_the_old_selection() {
        let mut session = Session::new();
        session.set_ready(ReadyTable {
            items: vec![work_item("1", "假設工程")],
        });
        let item = work_item("1", "假設工程");
        select(&mut session, item.selection_key(), item.to_selected());
        assert_eq!(session.selection().len(), 1);

        session.set_ready(ReadyTable {
            items: vec![work_item("2", "拆除工程")],
        });
        assert!(session.selection().is_empty());
        assert!(session.ready().is_some());
    }

    #[test]
    fn installing_plants_keeps_the_selection() {
        let mut session = Session::new();
        session.set_ready(ReadyTable {
            items: vec![work_item("1", "假設工程")],
        });
        let item = work_item("1", "假設工程");
        select(&mut session, item.selection_key(), item.to_selected());

        session.set_plants(PlantTable::default());
        assert_eq!(session.selection().len(), 1);
    }

    #[test]
    fn reset_keeps_tables_but_clears_selection() {
        let mut session = Session::new();
        session.set_ready(ReadyTable {
            items: vec![work_item("1", "假設工程")],
        });
        let item = work_item("1", "假設工程");
        select(&mut session, item.selection_key(), item.to_selected());

        session.reset();
        assert!(session.selection().is_empty());
        assert!(session.ready().is_some());
        assert!(session.selection().export().is_empty());
    }
}

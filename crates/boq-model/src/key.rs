#![deny(unsafe_code)]

use std::fmt;

/// Which workbook a selected row came from. Part of the selection
/// identity so an item and a plant can never collide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Namespace {
    Item,
    Plant,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Item => "item",
            Namespace::Plant => "plant",
        }
    }
}

/// Stable identity of a selectable row: a namespace plus the row's
/// natural key (items: id + description, plants: group + variety).
///
/// The key is built from the row's own fields only, so re-rendering the
/// same filtered view reconstructs the same key and a checkbox toggle
/// hits the same store entry instead of minting a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionKey {
    namespace: Namespace,
    natural: String,
}

impl SelectionKey {
    /// Identity of a work item. `id` is expected in its stored form
    /// (chapter prefix already stripped).
    pub fn for_item(id: &str, description: &str) -> Self {
        Self {
            namespace: Namespace::Item,
            natural: format!("{id}｜{description}"),
        }
    }

    /// Identity of a planting row.
    pub fn for_plant(group: i64, variety: &str) -> Self {
        Self {
            namespace: Namespace::Plant,
            natural: format!("{group}｜{variety}"),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn natural_key(&self) -> &str {
        &self.natural
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace.as_str(), self.natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_fields_rebuild_the_same_key() {
        let a = SelectionKey::for_item("329", "技術工");
        let b = SelectionKey::for_item("329", "技術工");
        assert_eq!(a, b);
    }

    #[test]
    fn namespaces_never_collide() {
        let item = SelectionKey::for_item("33", "喬木");
        let plant = SelectionKey::for_plant(33, "喬木");
        assert_ne!(item, plant);
        assert_eq!(item.to_string(), "item:33｜喬木");
        assert_eq!(plant.to_string(), "plant:33｜喬木");
    }
}

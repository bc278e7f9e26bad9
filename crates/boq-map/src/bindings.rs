use serde::{Deserialize, Serialize};

use boq_model::RawTable;

use crate::BindingError;

/// Which raw columns supply the canonical item fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBindings {
    /// Source column for 項次.
    pub id: String,
    /// Source column for 項目及說明.
    pub description: String,
    /// Source column for 單位.
    pub unit: String,
}

impl ItemBindings {
    /// Every binding must name a column that exists in the raw table.
    pub fn validate(&self, raw: &RawTable) -> Result<(), BindingError> {
        for column in [&self.id, &self.description, &self.unit] {
            if raw.column_index(column).is_none() {
                return Err(BindingError::UnknownColumn(column.clone()));
            }
        }
        Ok(())
    }
}

/// Which raw columns supply the canonical planting fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantBindings {
    /// Source column for the group number.
    pub group: String,
    /// Source column for the specification text.
    pub spec: String,
    /// Source column for the variety name.
    pub variety: String,
}

impl PlantBindings {
    pub fn validate(&self, raw: &RawTable) -> Result<(), BindingError> {
        for column in [&self.group, &self.spec, &self.variety] {
            if raw.column_index(column).is_none() {
                return Err(BindingError::UnknownColumn(column.clone()));
            }
        }
        Ok(())
    }
}

/// On-disk bindings document (`--bindings FILE`): lets a repeat user
/// skip the interactive binding prompts. Either section may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingsFile {
    #[serde(default)]
    pub items: Option<ItemBindings>,
    #[serde(default)]
    pub plants: Option<PlantBindings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_headers(headers: &[&str]) -> RawTable {
        RawTable::new(headers.iter().map(|h| (*h).to_string()).collect(), vec![])
    }

    #[test]
    fn validate_reports_the_missing_column() {
        let raw = raw_with_headers(&["項次", "工程項目", "單位"]);
        let bindings = ItemBindings {
            id: "項次".to_string(),
            description: "項目及說明".to_string(),
            unit: "單位".to_string(),
        };
        let err = bindings.validate(&raw).unwrap_err();
        assert!(matches!(err, BindingError::UnknownColumn(ref c) if c == "項目及說明"));
    }

    #[test]
    fn bindings_file_round_trips_partial_sections() {
        let file = BindingsFile {
            items: Some(ItemBindings {
                id: "項次".to_string(),
                description: "工程項目".to_string(),
                unit: "單位".to_string(),
            }),
            plants: None,
        };
        let json = serde_json::to_string(&file).expect("serialize bindings");
        let round: BindingsFile = serde_json::from_str(&json).expect("deserialize bindings");
        assert_eq!(file, round);

        let partial: BindingsFile =
            serde_json::from_str(r#"{"plants":{"group":"編號","spec":"規格","variety":"植栽名稱"}}"#)
                .expect("deserialize plant-only bindings");
        assert!(partial.items.is_none());
        assert_eq!(partial.plants.unwrap().variety, "植栽名稱");
    }
}

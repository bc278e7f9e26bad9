use std::collections::HashSet;

use tracing::debug;

use boq_model::{PlantItem, PlantTable, ReadyTable, WorkItem, cmp_numeric_keys, numeric_key};

/// Rows shown when a plant query is empty.
pub const PLANT_PREVIEW_ROWS: usize = 5;

/// Final ordering of item matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Primary key: which input term matched; secondary: numeric key.
    ByInput,
    /// Numeric key only, regardless of which term matched.
    ByNumericKey,
}

/// What an empty query yields. Each entry point picks one policy
/// explicitly instead of inheriting an ambient default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQueryPolicy {
    /// The whole table, ordered like a single match-everything term.
    All,
    /// The first N rows in table order, as a preview.
    Preview(usize),
}

/// A filtered row, tagged with the rank of the term that matched it.
#[derive(Debug, Clone)]
pub struct ItemMatch {
    pub item: WorkItem,
    pub input_rank: usize,
    pub numeric_key: Option<f64>,
}

/// Filter result. Zero matches is not an error: it carries sample
/// searchable values so the caller can show what would have matched.
#[derive(Debug, Clone)]
pub enum FilterOutcome {
    Matches(Vec<ItemMatch>),
    NoMatches { samples: Vec<String> },
}

/// Run the keyword filter/merge pipeline over the item table.
///
/// Per term (in input order), rows whose description or id contains the
/// term as a literal substring are collected and tagged with the term's
/// rank. Matches are concatenated across terms, deduplicated by
/// (description, unit) keeping the earliest scan, and stably sorted per
/// `order`. Ids without a digit run sort last, ties by scan order.
pub fn filter_items(
    table: &ReadyTable,
    terms: &[String],
    order: SortOrder,
    on_empty: EmptyQueryPolicy,
) -> FilterOutcome {
    if terms.is_empty() {
        return match on_empty {
            EmptyQueryPolicy::Preview(limit) => FilterOutcome::Matches(
                table.items.iter().take(limit).map(|item| to_match(item, 0)).collect(),
            ),
            EmptyQueryPolicy::All => {
                let mut matches: Vec<ItemMatch> =
                    table.items.iter().map(|item| to_match(item, 0)).collect();
                dedup_matches(&mut matches);
                sort_matches(&mut matches, order);
                FilterOutcome::Matches(matches)
            }
        };
    }

    let mut matches = Vec::new();
    for (rank, term) in terms.iter().enumerate() {
        for item in &table.items {
            if item.description.contains(term.as_str()) || item.id.contains(term.as_str()) {
                matches.push(to_match(item, rank));
            }
        }
    }
    dedup_matches(&mut matches);
    if matches.is_empty() {
        debug!(terms = terms.len(), "no rows matched");
        return FilterOutcome::NoMatches {
            samples: sample_labels(table, 10),
        };
    }
    sort_matches(&mut matches, order);
    debug!(terms = terms.len(), matches = matches.len(), "filtered item table");
    FilterOutcome::Matches(matches)
}

/// Filter the planting table: a row matches when its variety contains
/// any term. Empty terms show the first [`PLANT_PREVIEW_ROWS`] rows.
/// Either way the result is ordered ascending by group, stably.
pub fn filter_plants(table: &PlantTable, terms: &[String]) -> Vec<PlantItem> {
    let mut picked: Vec<PlantItem> = if terms.is_empty() {
        table.plants.iter().take(PLANT_PREVIEW_ROWS).cloned().collect()
    } else {
        table
            .plants
            .iter()
            .filter(|plant| terms.iter().any(|term| plant.variety.contains(term.as_str())))
            .cloned()
            .collect()
    };
    picked.sort_by_key(|plant| plant.group);
    picked
}

/// Up to `limit` distinct `id｜description` pairs, for the "no matches"
/// hint.
pub fn sample_labels(table: &ReadyTable, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .items
        .iter()
        .map(|item| format!("{}｜{}", item.id, item.description))
        .filter(|label| seen.insert(label.clone()))
        .take(limit)
        .collect()
}

fn to_match(item: &WorkItem, input_rank: usize) -> ItemMatch {
    ItemMatch {
        numeric_key: numeric_key(&item.id),
        input_rank,
        item: item.clone(),
    }
}

/// Keep the first occurrence of each (description, unit) pair.
fn dedup_matches(matches: &mut Vec<ItemMatch>) {
    let mut seen = HashSet::new();
    matches.retain(|m| seen.insert((m.item.description.clone(), m.item.unit.clone())));
}

fn sort_matches(matches: &mut [ItemMatch], order: SortOrder) {
    match order {
        SortOrder::ByInput => matches.sort_by(|a, b| {
            a.input_rank
                .cmp(&b.input_rank)
                .then_with(|| cmp_numeric_keys(a.numeric_key, b.numeric_key))
        }),
        SortOrder::ByNumericKey => {
            matches.sort_by(|a, b| cmp_numeric_keys(a.numeric_key, b.numeric_key));
        }
    }
}

//! Filter/merge pipeline behavior: ranking, dedup, ordering and the
//! empty-query policies.

use std::collections::BTreeMap;

use boq_model::{PlantItem, PlantTable, ReadyTable, WorkItem};
use boq_select::{
    EmptyQueryPolicy, FilterOutcome, SortOrder, filter_items, filter_plants, split_terms,
};

fn item(id: &str, description: &str, unit: &str) -> WorkItem {
    WorkItem {
        id: id.to_string(),
        description: description.to_string(),
        unit: unit.to_string(),
        extras: BTreeMap::new(),
    }
}

fn ids(outcome: &FilterOutcome) -> Vec<String> {
    match outcome {
        FilterOutcome::Matches(matches) => {
            matches.iter().map(|m| m.item.id.clone()).collect()
        }
        FilterOutcome::NoMatches { .. } => panic!("expected matches"),
    }
}

#[test]
fn duplicate_description_and_unit_keeps_the_first_scan() {
    let table = ReadyTable {
        items: vec![
            item("1", "技術工", "工"),
            item("2", "技術工", "工"),
            item("3", "技術工(特殊)", "工"),
        ],
    };
    let terms = split_terms("技術工，工");
    let outcome = filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&outcome), vec!["1", "3"]);
}

#[test]
fn numeric_sort_is_numeric_not_lexicographic() {
    let table = ReadyTable {
        items: vec![
            item("3", "喬木甲", "株"),
            item("10", "喬木乙", "株"),
            item("2", "喬木丙", "株"),
        ],
    };
    let terms = split_terms("喬木");
    let outcome = filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&outcome), vec!["2", "3", "10"]);
}

#[test]
fn input_order_mode_groups_by_term_rank() {
    let table = ReadyTable {
        items: vec![
            item("5", "A級客土", "m3"),
            item("1", "B級客土", "m3"),
            item("9", "B級基肥", "包"),
            item("3", "A級基肥", "包"),
        ],
    };
    let terms = split_terms("B級，A級");

    // all B-matches precede all A-matches, each internally by key
    let by_input = filter_items(&table, &terms, SortOrder::ByInput, EmptyQueryPolicy::All);
    assert_eq!(ids(&by_input), vec!["1", "9", "3", "5"]);

    // with the mode off, ranks are ignored and keys interleave
    let by_key = filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&by_key), vec!["1", "3", "5", "9"]);
}

#[test]
fn id_substring_matches_too() {
    let table = ReadyTable {
        items: vec![item("1.329", "技術工", "工"), item("2.001", "普通工", "工")],
    };
    let terms = split_terms("329");
    let outcome = filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&outcome), vec!["1.329"]);
}

#[test]
fn digitless_ids_sort_last_in_scan_order() {
    let table = ReadyTable {
        items: vec![
            item("分析甲", "喬木支架", "組"),
            item("7", "喬木", "株"),
            item("分析乙", "喬木客土", "m3"),
        ],
    };
    let terms = split_terms("喬木");
    let outcome = filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&outcome), vec!["7", "分析甲", "分析乙"]);
}

#[test]
fn empty_query_policies_are_explicit() {
    let table = ReadyTable {
        items: vec![
            item("3", "喬木", "株"),
            item("1", "客土", "m3"),
            item("2", "基肥", "包"),
        ],
    };

    // preview: first rows in table order, untouched by sorting
    let preview = filter_items(&table, &[], SortOrder::ByNumericKey, EmptyQueryPolicy::Preview(2));
    assert_eq!(ids(&preview), vec!["3", "1"]);

    // all: the whole table through the normal pipeline
    let all = filter_items(&table, &[], SortOrder::ByNumericKey, EmptyQueryPolicy::All);
    assert_eq!(ids(&all), vec!["1", "2", "3"]);
}

#[test]
fn zero_matches_surfaces_samples_instead_of_an_empty_success() {
    let table = ReadyTable {
        items: vec![item("1", "假設工程", "式"), item("2", "拆除工程", "式")],
    };
    let terms = split_terms("噴灌");
    match filter_items(&table, &terms, SortOrder::ByNumericKey, EmptyQueryPolicy::All) {
        FilterOutcome::NoMatches { samples } => {
            assert_eq!(samples, vec!["1｜假設工程", "2｜拆除工程"]);
        }
        FilterOutcome::Matches(_) => panic!("expected the no-matches outcome"),
    }
}

#[test]
fn plant_filter_matches_variety_and_orders_by_group() {
    let table = PlantTable {
        plants: vec![
            PlantItem { group: 9, spec: "H2.5m".to_string(), variety: "樟樹".to_string() },
            PlantItem { group: 2, spec: "H1.8m".to_string(), variety: "樟樹".to_string() },
            PlantItem { group: 5, spec: "H3.0m".to_string(), variety: "楓香".to_string() },
        ],
    };

    let matched = filter_plants(&table, &split_terms("樟"));
    let groups: Vec<i64> = matched.iter().map(|p| p.group).collect();
    assert_eq!(groups, vec![2, 9]);

    // empty query: the first five rows, still ordered by group
    let preview = filter_plants(&table, &[]);
    let groups: Vec<i64> = preview.iter().map(|p| p.group).collect();
    assert_eq!(groups, vec![2, 5, 9]);
}

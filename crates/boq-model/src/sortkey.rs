#![deny(unsafe_code)]

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern"));

/// Numeric sort key of a free-form id: the first run of decimal digits,
/// as a float. `"1.329"` → 1, `"分析表33"` → 33. Ids without any digit
/// run have no key and sort last (see [`cmp_numeric_keys`]).
pub fn numeric_key(id: &str) -> Option<f64> {
    DIGIT_RUN
        .find(id)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Export ordering key: the first digit run as an integer, 0 when the
/// id carries no digits (or the run overflows).
pub fn export_key(id: &str) -> u64 {
    DIGIT_RUN
        .find(id)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Pure-numeric string form of an id: the first digit run with leading
/// zeros dropped (`"分析表33"` → `"33"`, `"033"` → `"33"`). `None` when
/// the id has no digit run.
pub fn pure_numeric_id(id: &str) -> Option<String> {
    DIGIT_RUN
        .find(id)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(|n| n.to_string())
}

/// Ordering for optional numeric keys: present keys ascending, absent
/// keys last. Stable sorts preserve scan order among equal/absent keys.
pub fn cmp_numeric_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

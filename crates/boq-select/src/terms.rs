/// Split raw query text into search terms.
///
/// Delimiters are the half-width comma, the full-width comma and the
/// ideographic enumeration comma; terms are trimmed and empties are
/// discarded, so `"喬木，, 吊卡車、"` yields two terms.
pub fn split_terms(raw: &str) -> Vec<String> {
    raw.split([',', '，', '、'])
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_three_delimiters() {
        assert_eq!(
            split_terms("喬木，吊卡車,技術工、客土"),
            vec!["喬木", "吊卡車", "技術工", "客土"]
        );
    }

    #[test]
    fn trims_and_drops_empty_terms() {
        assert_eq!(split_terms(" 喬木 ，, 、技術工 "), vec!["喬木", "技術工"]);
        assert!(split_terms("").is_empty());
        assert!(split_terms(" ，、, ").is_empty());
    }

    #[test]
    fn keeps_input_order() {
        assert_eq!(split_terms("B，A"), vec!["B", "A"]);
    }
}

use super::search;
use crate::node::Forest;
use crate::parser::parse;

fn hit_texts(forest: &Forest, query: &str) -> Vec<String> {
    search(forest, query)
        .into_iter()
        .map(|id| forest.text(id).to_string())
        .collect()
}

#[test]
fn test_case_insensitive_substring() {
    let forest = parse(["Hello", "  world", "    WOR"], None);

    assert_eq!(hit_texts(&forest, "wor"), ["world", "WOR"]);
}

#[test]
fn test_empty_forest() {
    let forest = Forest::new();

    assert!(search(&forest, "anything").is_empty());
}

#[test]
fn test_pre_order_across_roots() {
    let forest = parse(["x1", "  a", "    x2", "  x3", "x4", "  x5"], None);

    assert_eq!(hit_texts(&forest, "X"), ["x1", "x2", "x3", "x4", "x5"]);
}

#[test]
fn test_non_matching_ancestor_excluded() {
    let forest = parse(["Config", "  servers", "    primary: db01"], None);

    assert_eq!(hit_texts(&forest, "db01"), ["primary: db01"]);
}

#[test]
fn test_empty_query_matches_everything() {
    let forest = parse(["a", "  b", "c"], None);

    assert_eq!(hit_texts(&forest, ""), ["a", "b", "c"]);
}

#[test]
fn test_dropped_lines_are_not_found() {
    let forest = parse(["A", "    B", "  needle"], None);

    assert!(search(&forest, "needle").is_empty());
}

#[test]
fn test_unicode_case_folding() {
    let forest = parse(["Straße", "  ÉCOLE"], None);

    assert_eq!(hit_texts(&forest, "école"), ["ÉCOLE"]);
}

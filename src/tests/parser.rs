use super::{parse, LineIndentParser};
use crate::node::{Forest, NodeId};

fn texts(forest: &Forest, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| forest.text(id).to_string()).collect()
}

fn shape(forest: &Forest) -> Vec<(String, usize, Option<String>)> {
    forest
        .pre_order()
        .map(|node| {
            (
                node.text.clone(),
                node.depth,
                node.parent.map(|p| forest.text(p).to_string()),
            )
        })
        .collect()
}

#[test]
fn test_siblings_and_return_to_root() {
    let forest = parse(["A", "  B", "  C", "D"], None);

    assert_eq!(texts(&forest, forest.roots()), ["A", "D"]);
    let a = forest.roots()[0];
    let d = forest.roots()[1];
    assert_eq!(texts(&forest, forest.children(a)), ["B", "C"]);
    assert!(forest.children(d).is_empty(), "D should have no children");
    assert_eq!(forest.node(forest.children(a)[1]).depth, 1);
}

#[test]
fn test_dedent_to_recorded_width() {
    let forest = parse(["A", "  B", "    C", "  D"], None);

    let a = forest.roots()[0];
    assert_eq!(forest.roots().len(), 1);
    assert_eq!(texts(&forest, forest.children(a)), ["B", "D"]);

    let b = forest.children(a)[0];
    assert_eq!(texts(&forest, forest.children(b)), ["C"]);
    assert_eq!(forest.node(forest.children(b)[0]).depth, 2);
}

#[test]
fn test_dedent_to_unseen_width_drops_line() {
    let mut parser = LineIndentParser::new();
    for line in ["A", "    B", "  C"] {
        parser.push_line(line);
    }
    assert_eq!(parser.dropped(), 1);
    let forest = parser.finish();

    assert_eq!(texts(&forest, forest.roots()), ["A"]);
    let a = forest.roots()[0];
    assert_eq!(texts(&forest, forest.children(a)), ["B"]);
    assert!(
        forest.pre_order().all(|node| node.text != "C"),
        "C must not be reachable"
    );
    assert_eq!(forest.len(), 2);
    assert_eq!(forest.arena_len(), 3, "dropped node still lives in the arena");
}

#[test]
fn test_dropped_line_still_steers_following_lines() {
    // C is dropped but becomes the previous line, so D (deeper) nests under it and is lost too.
    // E dedents back to C's width, takes C's missing parent and so becomes a root.
    let forest = parse(["A", "    B", "  C", "      D", "  E"], None);

    assert_eq!(texts(&forest, forest.roots()), ["A", "E"]);
    assert!(forest.pre_order().all(|node| node.text != "D"));
    assert_eq!(forest.node(forest.roots()[1]).depth, 0);
}

#[test]
fn test_first_line_is_root_even_when_indented() {
    let forest = parse(["    A", "    B", "      C"], None);

    assert_eq!(texts(&forest, forest.roots()), ["A", "B"]);
    let b = forest.roots()[1];
    assert_eq!(texts(&forest, forest.children(b)), ["C"]);
}

#[test]
fn test_whitespace_only_lines_are_skipped() {
    let forest = parse(["A", "", "  B", "     ", "\t", "  C"], None);

    let a = forest.roots()[0];
    assert_eq!(forest.roots().len(), 1);
    assert_eq!(texts(&forest, forest.children(a)), ["B", "C"]);
}

#[test]
fn test_width_is_exact_not_a_multiple() {
    // Three-column indentation and a mixed step both work; only exact widths match.
    let forest = parse(["A", "   B", "      C", "   D", " E"], None);

    let a = forest.roots()[0];
    assert_eq!(texts(&forest, forest.children(a)), ["B", "D"]);
    // " E" dedents to width 1, never recorded.
    assert!(forest.pre_order().all(|node| node.text != "E"));
}

#[test]
fn test_tabs_count_as_single_columns() {
    let forest = parse(["A", "\tB", "\t\tC", "\tD"], None);

    let a = forest.roots()[0];
    assert_eq!(texts(&forest, forest.children(a)), ["B", "D"]);
}

#[test]
fn test_tab_and_space_of_same_count_share_a_width() {
    // Width is a character count, so one tab and one space land on the same level.
    let forest = parse(["A", "\tB", " C", "\t\tD", " E"], None);

    let a = forest.roots()[0];
    assert_eq!(texts(&forest, forest.children(a)), ["B", "C", "E"]);
    let c = forest.children(a)[1];
    assert_eq!(texts(&forest, forest.children(c)), ["D"]);
}

#[test]
fn test_pop_most_recent_at_width() {
    // B and D are both recorded at width 2; the dedent to F pops D, the later one.
    let forest = parse(["A", "  B", "X", "  D", "    E", "  F", "    G", "  H"], None);

    assert_eq!(texts(&forest, forest.roots()), ["A", "X"]);
    let x = forest.roots()[1];
    assert_eq!(texts(&forest, forest.children(x)), ["D", "F", "H"]);
}

#[test]
fn test_repeated_dedents_exhaust_recorded_width() {
    // Each dedent to width 0 pops the root pushed just before it and replaces it.
    let forest = parse(["A", "  B", "C", "  X", "D", "  Y", "F"], None);

    assert_eq!(texts(&forest, forest.roots()), ["A", "C", "D", "F"]);
}

#[test]
fn test_depth_matches_parent() {
    let forest = parse(["a", "  b", "    c", "      d", "    e", "  f", "g"], None);

    for node in forest.pre_order() {
        match node.parent {
            Some(parent) => assert_eq!(node.depth, forest.node(parent).depth + 1),
            None => assert_eq!(node.depth, 0),
        }
    }
}

#[test]
fn test_parse_twice_is_identical() {
    let lines = ["root", "  a", "    a1", "    a2", "  b", "other"];
    let first = parse(lines, None);
    let second = parse(lines, None);

    assert_eq!(shape(&first), shape(&second));
}

#[test]
fn test_identity_transform_matches_no_transform() {
    let lines = ["root", "  a", "    a1", "  b"];
    let identity = |line: &str| line.to_string();

    let plain = parse(lines, None);
    let transformed = parse(lines, Some(&identity));

    assert_eq!(shape(&plain), shape(&transformed));
}

#[test]
fn test_transform_applies_before_measuring() {
    let lines = ["root", "->child", "->->grandchild"];
    let expand_arrows = |line: &str| line.replace("->", "  ");

    let forest = parse(lines, Some(&expand_arrows));

    let root = forest.roots()[0];
    let child = forest.children(root)[0];
    assert_eq!(forest.text(child), "child");
    assert_eq!(texts(&forest, forest.children(child)), ["grandchild"]);
}

#[test]
fn test_text_keeps_trailing_content() {
    let forest = parse(["A", "  key: value  "], None);

    let a = forest.roots()[0];
    assert_eq!(forest.text(forest.children(a)[0]), "key: value  ");
}

#[test]
fn test_empty_input_gives_empty_forest() {
    let forest = parse(Vec::<String>::new(), None);

    assert!(forest.is_empty());
    assert_eq!(forest.arena_len(), 0);
}

#[test]
fn test_reparse_shares_nothing() {
    let first = parse(["old", "  stale"], None);
    let second = parse(["new"], None);

    assert_eq!(texts(&second, second.roots()), ["new"]);
    assert!(second.pre_order().all(|node| node.text != "old" && node.text != "stale"));
    assert_eq!(first.len(), 2, "earlier forest is untouched");
}

#[test]
fn test_parse_streaming_matches_parse() {
    use crate::line_buffer::LineReader;

    let text = "A\n  B\n    C\n  D\n";
    let streamed = super::parse_streaming(LineReader::new(text.as_bytes()), None);
    let listed = parse(text.lines(), None);

    assert_eq!(shape(&streamed), shape(&listed));
}

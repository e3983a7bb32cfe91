//! Turns browser state into something printable.
//!
//! Plain-text output draws the visible rows as a tree with box-drawing characters. JSON output
//! serialises either the nested forest or a flat list of search hits with their ancestry.

use crate::browser::{Row, TreeBrowser};
use crate::node::{Forest, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Generate box-drawing prefix for tree structure
fn get_tree_prefix(level: usize, is_last: bool, parent_states: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for continues in parent_states.iter().take(level).skip(1) {
        if *continues {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

/// Which rows are the last ones at their level before their parent's run ends.
fn last_at_level(rows: &[Row]) -> Vec<bool> {
    let mut is_last = vec![true; rows.len()];
    for (i, row) in rows.iter().enumerate() {
        for next in &rows[i + 1..] {
            if next.level < row.level {
                break;
            }
            if next.level == row.level {
                is_last[i] = false;
                break;
            }
        }
    }
    is_last
}

#[must_use]
/// Render the browser's visible rows, one line each.
///
/// Collapsed nodes that have children are marked with a trailing `[+]`.
pub fn render_rows(browser: &TreeBrowser, guides: bool) -> String {
    let rows = browser.visible_rows();
    let is_last = last_at_level(rows);
    let mut parent_has_siblings: Vec<bool> = Vec::new();
    let mut out = String::new();

    for (i, row) in rows.iter().enumerate() {
        parent_has_siblings.truncate(row.level);
        while parent_has_siblings.len() < row.level {
            parent_has_siblings.push(false);
        }

        let prefix = if guides {
            get_tree_prefix(row.level, is_last[i], &parent_has_siblings)
        } else {
            "  ".repeat(row.level)
        };
        let marker = if row.has_children && !row.expanded {
            " [+]"
        } else {
            ""
        };
        let _ = writeln!(out, "{prefix}{}{marker}", browser.forest().text(row.id));

        parent_has_siblings.push(!is_last[i]);
    }

    out
}

#[must_use]
/// Render each hit on its own line as a breadcrumb from its outermost ancestor.
pub fn render_hits(browser: &TreeBrowser) -> String {
    let mut out = String::new();
    for &id in browser.displayed() {
        let _ = writeln!(out, "{}", browser.breadcrumb(id));
    }
    out
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// Nested, serialisable copy of one node and its subtree.
pub struct ExportNode {
    /// Line content without indentation.
    pub text: String,
    /// Nesting level, 0 for roots.
    pub depth: usize,
    /// Nested nodes in order of appearance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExportNode>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// A search hit along with the texts of its ancestors.
pub struct ExportHit {
    /// Text of the matching node.
    pub text: String,
    /// Nesting level of the matching node.
    pub depth: usize,
    /// Ancestor texts from the outermost down, excluding the hit itself.
    pub path: Vec<String>,
}

fn export_node(forest: &Forest, id: NodeId, max_depth: Option<usize>) -> ExportNode {
    let node = forest.node(id);
    let children = if max_depth.is_some_and(|max| node.depth >= max) {
        Vec::new()
    } else {
        node.children
            .iter()
            .map(|&child| export_node(forest, child, max_depth))
            .collect()
    };
    ExportNode {
        text: node.text.clone(),
        depth: node.depth,
        children,
    }
}

#[must_use]
/// Nested copy of every reachable node, stopping below `max_depth` when one is given.
pub fn export_forest(forest: &Forest, max_depth: Option<usize>) -> Vec<ExportNode> {
    forest
        .roots()
        .iter()
        .map(|&id| export_node(forest, id, max_depth))
        .collect()
}

#[must_use]
/// Each hit with its depth and the texts of its ancestors.
pub fn export_hits(forest: &Forest, hits: &[NodeId]) -> Vec<ExportHit> {
    hits.iter()
        .map(|&id| {
            let mut path: Vec<String> = forest
                .ancestry(id)
                .into_iter()
                .map(|idx| forest.text(idx).to_string())
                .collect();
            path.pop();
            ExportHit {
                text: forest.text(id).to_string(),
                depth: forest.node(id).depth,
                path,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;

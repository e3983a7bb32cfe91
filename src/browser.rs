//! Presentation-side state for browsing a parsed dump.
//!
//! A viewer needs a single source of truth for what is on screen: which forest is loaded, which
//! query filters it, which nodes are expanded and where the cursor sits. The browser keeps the
//! displayed nodes flattened into [`Row`]s so navigation is a matter of walking a list, and it
//! owns the convention that an empty query means "show the whole forest" rather than "match
//! everything".

use crate::node::{Forest, NodeId};
use crate::search::search;
use std::collections::HashSet;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What the displayed top-level sequence currently is.
pub enum Mode {
    /// The forest's roots, unfiltered.
    Tree,
    /// Search hits for a non-empty query, each shown at the top level.
    Search,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One visible line of the flattened tree.
pub struct Row {
    /// Node shown on this row.
    pub id: NodeId,
    /// Display nesting, 0 for whatever sits at the top of the current view.
    pub level: usize,
    /// Whether the node has children that could be shown.
    pub has_children: bool,
    /// Whether those children are currently shown.
    pub expanded: bool,
}

/// Query, expansion and cursor state over one forest.
pub struct TreeBrowser {
    forest: Forest,
    query: String,
    hits: Option<Vec<NodeId>>,
    expanded: HashSet<NodeId>,
    rows: Vec<Row>,
    /// Selected row in [`TreeBrowser::visible_rows`].
    pub current_row: usize,
}

impl TreeBrowser {
    #[must_use]
    /// Start browsing `forest` with everything collapsed and no query.
    pub fn new(forest: Forest) -> Self {
        let mut browser = Self {
            forest,
            query: String::new(),
            hits: None,
            expanded: HashSet::new(),
            rows: Vec::new(),
            current_row: 0,
        };
        browser.rebuild_rows();
        browser
    }

    #[must_use]
    /// Forest being browsed.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    #[must_use]
    /// Active query, empty when not searching.
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    /// Whether the view shows the whole forest or search hits.
    pub fn mode(&self) -> Mode {
        if self.hits.is_some() {
            Mode::Search
        } else {
            Mode::Tree
        }
    }

    #[must_use]
    /// Top-level sequence on display: the search hits, or the roots when not searching.
    pub fn displayed(&self) -> &[NodeId] {
        match &self.hits {
            Some(hits) => hits,
            None => self.forest.roots(),
        }
    }

    /// Filter the view by `query`, or go back to the full forest when it is empty.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.hits = if query.is_empty() {
            None
        } else {
            Some(search(&self.forest, query))
        };
        self.current_row = 0;
        self.rebuild_rows();
    }

    /// Show hits for `query` that were computed elsewhere, e.g. on a worker thread.
    ///
    /// An empty query still reverts to the full forest and `hits` is ignored. Hits that point
    /// past the current forest's arena, e.g. ones computed before a
    /// [`TreeBrowser::replace_forest`], are skipped.
    pub fn apply_search(&mut self, query: &str, hits: Vec<NodeId>) {
        query.clone_into(&mut self.query);
        self.hits = if query.is_empty() {
            None
        } else {
            let total = hits.len();
            let hits: Vec<NodeId> = hits
                .into_iter()
                .filter(|&id| self.forest.get(id).is_some())
                .collect();
            if hits.len() < total {
                debug!(stale = total - hits.len(), "skipping hits from another forest");
            }
            Some(hits)
        };
        self.current_row = 0;
        self.rebuild_rows();
    }

    /// Swap in a freshly parsed forest, keeping the active query.
    ///
    /// Expansion state refers to nodes of the old forest, so it is discarded.
    pub fn replace_forest(&mut self, forest: Forest) {
        self.forest = forest;
        self.expanded.clear();
        self.hits = if self.query.is_empty() {
            None
        } else {
            Some(search(&self.forest, &self.query))
        };
        self.current_row = 0;
        self.rebuild_rows();
    }

    #[must_use]
    /// Whether the children of `id` are shown.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Show the children of `id`.
    pub fn expand(&mut self, id: NodeId) {
        if self.expanded.insert(id) {
            self.rebuild_rows();
        }
    }

    /// Hide the children of `id`.
    pub fn collapse(&mut self, id: NodeId) {
        if self.expanded.remove(&id) {
            self.rebuild_rows();
        }
    }

    /// Flip whether the children of `id` are shown.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.rebuild_rows();
    }

    /// Expand every reachable node that has children.
    pub fn expand_all(&mut self) {
        self.expanded = self
            .forest
            .pre_order()
            .filter(|node| !node.children.is_empty())
            .map(|node| node.id)
            .collect();
        self.rebuild_rows();
    }

    /// Hide every child, leaving only the displayed top-level nodes.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.rebuild_rows();
    }

    /// Expand exactly the nodes shallower than `depth`, so nodes down to `depth` are visible.
    pub fn expand_to_depth(&mut self, depth: usize) {
        self.expanded = self
            .forest
            .pre_order()
            .filter(|node| node.depth < depth && !node.children.is_empty())
            .map(|node| node.id)
            .collect();
        self.rebuild_rows();
    }

    #[must_use]
    /// Displayed nodes flattened in display order, descending into expanded nodes.
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows
    }

    fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, usize)> =
            self.displayed().iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, level)) = stack.pop() {
            let children = self.forest.children(id);
            let expanded = self.expanded.contains(&id);
            rows.push(Row {
                id,
                level,
                has_children: !children.is_empty(),
                expanded,
            });
            if expanded {
                stack.extend(children.iter().rev().map(|&child| (child, level + 1)));
            }
        }

        self.rows = rows;
        if self.current_row >= self.rows.len() {
            self.current_row = self.rows.len().saturating_sub(1);
        }
    }

    #[must_use]
    /// Node under the cursor.
    pub fn current_node(&self) -> Option<NodeId> {
        self.rows.get(self.current_row).map(|row| row.id)
    }

    #[must_use]
    /// Row of the containing node, if it is visible.
    pub fn navigate_to_parent(&self) -> Option<usize> {
        let parent = self.forest.parent(self.current_node()?)?;
        self.row_of(parent)
    }

    #[must_use]
    /// Row of the first child, if the current node is expanded.
    pub fn navigate_to_first_child(&self) -> Option<usize> {
        let row = self.rows.get(self.current_row)?;
        if row.expanded && row.has_children {
            Some(self.current_row + 1)
        } else {
            None
        }
    }

    #[must_use]
    /// Finds the next row at the same display level.
    pub fn navigate_to_next_sibling(&self) -> Option<usize> {
        let current_level = self.rows.get(self.current_row)?.level;

        for (i, row) in self.rows.iter().enumerate().skip(self.current_row + 1) {
            if row.level == current_level {
                return Some(i);
            }
            // Stop if we've gone up a level (past our parent's siblings)
            if row.level < current_level {
                break;
            }
        }

        None
    }

    #[must_use]
    /// Finds the previous row at the same display level.
    pub fn navigate_to_prev_sibling(&self) -> Option<usize> {
        let current_level = self.rows.get(self.current_row)?.level;

        for (i, row) in self.rows.iter().enumerate().take(self.current_row).rev() {
            if row.level == current_level {
                return Some(i);
            }
            if row.level < current_level {
                break;
            }
        }

        None
    }

    #[must_use]
    /// Row index of the first visible row.
    pub fn navigate_to_first(&self) -> Option<usize> {
        if self.rows.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    #[must_use]
    /// Row index of the last visible row.
    pub fn navigate_to_last(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    #[must_use]
    /// Path from the outermost ancestor down to `id`, joined with `" > "`.
    pub fn breadcrumb(&self, id: NodeId) -> String {
        self.forest
            .ancestry(id)
            .into_iter()
            .map(|idx| self.forest.text(idx))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn row_of(&self, id: NodeId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }
}

#[cfg(test)]
#[path = "tests/browser.rs"]
mod tests;

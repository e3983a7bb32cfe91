//! Case-insensitive substring search over a parsed forest.
//!
//! The whole forest is rescanned on every query. Matches come back in pre-order, and a node is
//! judged on its own text only: a matching child does not pull in its parent and vice versa.

use crate::node::{Forest, NodeId};
use tracing::debug;

#[must_use]
/// Ids of every reachable node whose text contains `query`, ignoring case.
///
/// An empty query matches every node. Callers that want an empty query to mean "show the whole
/// forest" should check for it before calling, as [`crate::browser::TreeBrowser`] does.
pub fn search(forest: &Forest, query: &str) -> Vec<NodeId> {
    let needle = query.to_lowercase();

    let hits: Vec<NodeId> = forest
        .pre_order()
        .filter(|node| node.text.to_lowercase().contains(&needle))
        .map(|node| node.id)
        .collect();

    debug!(query, hits = hits.len(), "searched forest");
    hits
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;

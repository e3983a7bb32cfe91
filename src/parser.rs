//! Indentation-driven tree construction.
//!
//! A dump is read one line at a time and each line is placed relative to the line before it,
//! using nothing but the width of its leading whitespace:
//!
//! - same width as the previous line: a sibling of it
//! - wider: a child of it
//! - narrower: a sibling of the most recent line recorded at exactly that width
//!
//! A dedent to a width that was never recorded has nowhere to go. Such a line is left out of
//! the forest, but it is still remembered as the previous line and under its width, so it keeps
//! steering the lines that follow (any children it gets are unreachable as well).
//!
//! Widths are compared as exact character counts. Nothing assumes a fixed indent step, so dumps
//! indented by two, three or four columns (or a mix) all parse the same way.

use crate::node::{Forest, NodeId};
use std::collections::HashMap;
use streaming_iterator::StreamingIterator;
use tracing::debug;

/// Per-line rewrite applied before a line becomes a node.
pub type Transform = dyn Fn(&str) -> String + Send + Sync;

/// Incremental builder turning lines into a [`Forest`].
///
/// All state is local to one value, so each parse starts from scratch and parsers never share
/// anything. Use [`parse`] for the common case of a complete list of lines.
pub struct LineIndentParser<'t> {
    forest: Forest,
    /// Nodes recorded at each indentation width, most recent last.
    levels: HashMap<usize, Vec<NodeId>>,
    prev: Option<NodeId>,
    transform: Option<&'t Transform>,
    dropped: usize,
}

impl Default for LineIndentParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> LineIndentParser<'t> {
    #[must_use]
    /// Parser that takes lines as they are.
    pub fn new() -> Self {
        Self {
            forest: Forest::new(),
            levels: HashMap::new(),
            prev: None,
            transform: None,
            dropped: 0,
        }
    }

    #[must_use]
    /// Parser that rewrites every line with `transform` before measuring it.
    pub fn with_transform(transform: &'t Transform) -> Self {
        Self::configured(Some(transform))
    }

    pub(crate) fn configured(transform: Option<&'t Transform>) -> Self {
        Self {
            transform,
            ..Self::new()
        }
    }

    #[must_use]
    /// Lines dropped so far because they dedented to an unseen width.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Feed one line, without its terminator.
    pub fn push_line(&mut self, raw: &str) {
        let transformed;
        let line = match self.transform {
            Some(transform) => {
                transformed = transform(raw);
                transformed.as_str()
            }
            None => raw,
        };

        let content = line.trim_start();
        if content.is_empty() {
            return;
        }
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        let text = content.to_string();

        let id = match self.prev {
            None => {
                let id = self.forest.alloc(text, 0, indent, None);
                self.forest.attach(id);
                id
            }
            Some(prev) => self.place(prev, text, indent),
        };

        self.levels.entry(indent).or_default().push(id);
        self.prev = Some(id);
    }

    fn place(&mut self, prev: NodeId, text: String, indent: usize) -> NodeId {
        let (prev_indent, prev_depth, prev_parent) = {
            let node = self.forest.node(prev);
            (node.indent, node.depth, node.parent)
        };

        if indent == prev_indent {
            let id = self.forest.alloc(text, prev_depth, indent, prev_parent);
            self.forest.attach(id);
            return id;
        }

        if indent > prev_indent {
            let id = self.forest.alloc(text, prev_depth + 1, indent, Some(prev));
            self.forest.attach(id);
            return id;
        }

        let anchor = self.levels.get_mut(&indent).and_then(Vec::pop);
        if let Some(anchor) = anchor {
            let (depth, parent) = {
                let node = self.forest.node(anchor);
                (node.depth, node.parent)
            };
            let id = self.forest.alloc(text, depth, indent, parent);
            self.forest.attach(id);
            id
        } else {
            debug!(indent, line = %text, "dropping line dedented to an unseen width");
            self.dropped += 1;
            self.forest.alloc(text, 0, indent, None)
        }
    }

    #[must_use]
    /// Consume the parser and return everything built so far.
    pub fn finish(self) -> Forest {
        debug!(
            nodes = self.forest.arena_len(),
            roots = self.forest.roots().len(),
            dropped = self.dropped,
            "parsed dump"
        );
        self.forest
    }
}

#[must_use]
/// Build a forest from complete lines, optionally rewriting each one first.
pub fn parse<I, S>(lines: I, transform: Option<&Transform>) -> Forest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = LineIndentParser::configured(transform);
    for line in lines {
        parser.push_line(line.as_ref());
    }
    parser.finish()
}

#[must_use]
/// Build a forest from a lending line source such as [`crate::line_buffer::LineReader`].
pub fn parse_streaming<S>(mut lines: S, transform: Option<&Transform>) -> Forest
where
    S: StreamingIterator<Item = str>,
{
    let mut parser = LineIndentParser::configured(transform);
    while let Some(line) = lines.next() {
        parser.push_line(line);
    }
    parser.finish()
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;

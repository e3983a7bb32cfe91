//! Per-line rewrites applied before a line becomes a node.
//!
//! The only transform shipped here masks sensitive text. It runs before indentation is measured
//! and before anything is stored, so neither the displayed tree nor search results ever contain
//! the original text.

use crate::error::Result;
use crate::parser::Transform;
use regex::{NoExpand, Regex};
use std::sync::Arc;

#[derive(Clone, Debug)]
/// Replaces every match of a set of patterns with a fixed placeholder.
pub struct Redactor {
    patterns: Vec<Regex>,
    replacement: String,
}

impl Redactor {
    /// Compile `patterns` into a redactor.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn new<I, S>(patterns: I, replacement: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            patterns,
            replacement: replacement.into(),
        })
    }

    #[must_use]
    /// Whether there are no patterns, so [`Redactor::apply`] never changes anything.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[must_use]
    /// `line` with every match of every pattern replaced, patterns applied in order.
    pub fn apply(&self, line: &str) -> String {
        let mut out = line.to_string();
        for pattern in &self.patterns {
            if pattern.is_match(&out) {
                out = pattern
                    .replace_all(&out, NoExpand(&self.replacement))
                    .into_owned();
            }
        }
        out
    }

    #[must_use]
    /// Shareable transform for handing to a parser or worker, or `None` with no patterns.
    pub fn into_transform(self) -> Option<Arc<Transform>> {
        if self.is_empty() {
            None
        } else {
            let transform: Arc<Transform> = Arc::new(move |line: &str| self.apply(line));
            Some(transform)
        }
    }
}

#[cfg(test)]
#[path = "tests/transform.rs"]
mod tests;

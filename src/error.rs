//! Errors raised at the fallible edges of the pipeline.
//!
//! Parsing and searching never fail: malformed indentation just drops a line. What can fail is
//! everything around them, reading the dump, formatting a value into it, exporting JSON,
//! compiling redaction patterns and handing work to a background thread.

use std::{fmt, io};

#[derive(Debug, thiserror::Error)]
/// Failure while producing, transforming or exporting a dump.
pub enum Error {
    /// Reading the dump source or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A `Debug` implementation reported an error while being dumped.
    #[error("failed to format value: {0}")]
    Format(#[from] fmt::Error),
    /// JSON serialisation of a value or an export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A redaction pattern is not a valid regular expression.
    #[error("invalid redaction pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The operating system refused to start a worker thread.
    #[error("failed to spawn {0} worker: {1}")]
    WorkerSpawn(&'static str, #[source] io::Error),
    /// A worker thread panicked before handing back its result.
    #[error("{0} worker panicked")]
    WorkerPanicked(&'static str),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Running a parse or a search away from the calling thread.
//!
//! Each job gets its own named thread and the result comes back through `join`. The work itself
//! stays single-threaded: a parse never shares its forest or indentation state while building,
//! and a search only reads the forest it was given.

use crate::error::{Error, Result};
use crate::node::{Forest, NodeId};
use crate::parser::{parse, Transform};
use crate::search::search;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Handle to a job running on a worker thread.
pub struct Job<T> {
    kind: &'static str,
    handle: JoinHandle<T>,
}

impl<T> Job<T> {
    #[must_use]
    /// Whether the worker has stopped, so [`Job::join`] will not block.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the job and take its result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerPanicked`] if the worker thread panicked.
    pub fn join(self) -> Result<T> {
        let kind = self.kind;
        self.handle.join().map_err(|_| Error::WorkerPanicked(kind))
    }
}

fn spawn<T, F>(kind: &'static str, work: F) -> Result<Job<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let handle = thread::Builder::new()
        .name(format!("tdump-{kind}"))
        .spawn(work)
        .map_err(|e| Error::WorkerSpawn(kind, e))?;
    debug!(kind, "spawned worker");
    Ok(Job { kind, handle })
}

/// Parse `lines` on a worker thread.
///
/// # Errors
///
/// Returns an error if the thread cannot be started.
pub fn spawn_parse(lines: Vec<String>, transform: Option<Arc<Transform>>) -> Result<Job<Forest>> {
    spawn("parse", move || parse(&lines, transform.as_deref()))
}

/// Search `forest` for `query` on a worker thread.
///
/// # Errors
///
/// Returns an error if the thread cannot be started.
pub fn spawn_search(forest: Arc<Forest>, query: String) -> Result<Job<Vec<NodeId>>> {
    spawn("search", move || search(&forest, &query))
}

#[cfg(test)]
#[path = "tests/worker.rs"]
mod tests;

//! treedump: turn indentation-structured dumps into a searchable tree.
//!
//! Feed the lines of any dump whose nesting is expressed through leading whitespace (pretty
//! `Debug` output, pretty JSON, log dumps) to [`parser::parse`] and get back a [`node::Forest`].
//! [`search::search`] then finds nodes by case-insensitive substring, and [`browser::TreeBrowser`]
//! layers the state a viewer needs on top.
#![allow(clippy::multiple_crate_versions)]

pub mod browser;
pub mod config;
pub mod dumpers;
pub mod error;
pub mod line_buffer;
pub mod node;
pub mod parser;
pub mod render;
pub mod search;
pub mod transform;
pub mod worker;

pub use error::{Error, Result};
pub use node::{Forest, Node, NodeId};
pub use parser::{parse, LineIndentParser, Transform};
pub use search::search;

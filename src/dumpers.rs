//! Dump sources and the sink they write into.
//!
//! Producing a textual dump of some value is not this crate's business, but the parser needs a
//! uniform way to receive one. A [`Dumper`] writes its dump as raw text into a [`TextSink`], in
//! chunks of whatever size suits it; [`parse_dump`] puts a [`LineAssembler`] in front of the
//! parser so the chunks become lines.

pub mod debug;
pub mod json;
pub mod text;

use crate::error::Result;
use crate::line_buffer::LineAssembler;
use crate::node::Forest;
use crate::parser::{LineIndentParser, Transform};

/// Receiver of raw dump text.
pub trait TextSink {
    /// Accept the next chunk. Chunks need not end on line boundaries.
    fn write_text(&mut self, text: &str);
}

impl TextSink for String {
    fn write_text(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// One strategy for rendering a value as indentation-structured text.
pub trait Dumper {
    /// Write the complete dump into `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be rendered.
    fn dump(&self, sink: &mut dyn TextSink) -> Result<()>;
}

/// Run `dumper` and parse its output into a forest.
///
/// # Errors
///
/// Returns whatever error the dumper reports.
pub fn parse_dump(dumper: &dyn Dumper, transform: Option<&Transform>) -> Result<Forest> {
    let mut parser = LineIndentParser::configured(transform);
    let mut assembler = LineAssembler::new(|line: &str| parser.push_line(line));
    dumper.dump(&mut assembler)?;
    assembler.finish();
    Ok(parser.finish())
}

#[cfg(test)]
#[path = "tests/dumpers.rs"]
mod tests;

//! Dumps that were rendered elsewhere and arrive as one block of text.

use crate::dumpers::{Dumper, TextSink};
use crate::error::Result;

/// Replays an already rendered dump.
pub struct TextDumper<'a>(pub &'a str);

impl Dumper for TextDumper<'_> {
    fn dump(&self, sink: &mut dyn TextSink) -> Result<()> {
        sink.write_text(self.0);
        Ok(())
    }
}

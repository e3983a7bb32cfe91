//! Dumps built from Rust's pretty `Debug` output.
//!
//! `{:#?}` already nests fields and elements four columns deeper than their container, which is
//! exactly the shape the parser wants. The formatter's output is streamed into the sink piece by
//! piece rather than collected first.

use crate::dumpers::{Dumper, TextSink};
use crate::error::Result;
use std::fmt::{self, Write};

/// Dumps a value through its alternate (`{:#?}`) `Debug` representation.
pub struct DebugDumper<'a, T: ?Sized>(pub &'a T);

struct SinkWriter<'s>(&'s mut dyn TextSink);

impl Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_text(s);
        Ok(())
    }
}

impl<T: fmt::Debug + ?Sized> Dumper for DebugDumper<'_, T> {
    fn dump(&self, sink: &mut dyn TextSink) -> Result<()> {
        let mut writer = SinkWriter(sink);
        writeln!(writer, "{:#?}", self.0)?;
        Ok(())
    }
}

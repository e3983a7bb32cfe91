//! Dumps built from pretty-printed JSON.

use crate::dumpers::{Dumper, TextSink};
use crate::error::Result;
use serde::Serialize;

/// Dumps any serialisable value as two-space indented JSON.
pub struct JsonDumper<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> Dumper for JsonDumper<'_, T> {
    fn dump(&self, sink: &mut dyn TextSink) -> Result<()> {
        let text = serde_json::to_string_pretty(self.0)?;
        sink.write_text(&text);
        sink.write_text("\n");
        Ok(())
    }
}

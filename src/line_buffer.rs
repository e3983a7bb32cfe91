//! Adapters that turn arbitrary text delivery into whole lines.
//!
//! Dumps arrive in two shapes. Push sources write chunks of any size (a `Debug` formatter emits
//! one token at a time), so [`LineAssembler`] buffers until it sees a newline. Pull sources are
//! readers, and [`LineReader`] lends one line at a time out of a reused buffer.

use crate::dumpers::TextSink;
use std::io::{self, BufRead};
use streaming_iterator::StreamingIterator;

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Buffers pushed text and hands complete lines to a callback.
///
/// A line is flushed exactly when its `\n` arrives and is passed on without the terminator
/// (a `\r` right before it is removed too). Text after the last newline waits for more input or
/// for [`LineAssembler::finish`].
pub struct LineAssembler<F: FnMut(&str)> {
    pending: String,
    on_line: F,
    lines: usize,
}

impl<F: FnMut(&str)> LineAssembler<F> {
    #[must_use]
    /// Assembler handing every completed line to `on_line`.
    pub fn new(on_line: F) -> Self {
        Self {
            pending: String::new(),
            on_line,
            lines: 0,
        }
    }

    /// Append a chunk, flushing every line it completes.
    pub fn push(&mut self, chunk: &str) {
        let mut rest = chunk;

        while let Some(pos) = rest.find('\n') {
            let (head, tail) = rest.split_at(pos + 1);
            if self.pending.is_empty() {
                (self.on_line)(strip_terminator(head));
            } else {
                self.pending.push_str(head);
                (self.on_line)(strip_terminator(&self.pending));
                self.pending.clear();
            }
            self.lines += 1;
            rest = tail;
        }

        self.pending.push_str(rest);
    }

    #[must_use]
    /// Text received since the last newline.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    #[must_use]
    /// Lines flushed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush any unterminated remainder as a final line and return the callback.
    pub fn finish(mut self) -> F {
        if !self.pending.is_empty() {
            let last = std::mem::take(&mut self.pending);
            (self.on_line)(strip_terminator(&last));
        }
        self.on_line
    }
}

impl<F: FnMut(&str)> TextSink for LineAssembler<F> {
    fn write_text(&mut self, text: &str) {
        self.push(text);
    }
}

/// Lending iterator over the lines of a reader, terminators removed.
///
/// The same buffer is reused for every line. A read error ends iteration early; check
/// [`LineReader::finish`] afterwards to find out whether the input was read completely.
pub struct LineReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> LineReader<R> {
    #[must_use]
    /// Read lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            error: None,
        }
    }

    /// Report the read error that stopped iteration, if any.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised by the underlying reader.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<R: BufRead> StreamingIterator for LineReader<R> {
    type Item = str;

    fn advance(&mut self) {
        if self.done {
            return;
        }
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => self.done = true,
            Ok(_) => {
                let len = strip_terminator(&self.buf).len();
                self.buf.truncate(len);
            }
            Err(e) => {
                self.error = Some(e);
                self.done = true;
            }
        }
    }

    fn get(&self) -> Option<&str> {
        if self.done {
            None
        } else {
            Some(&self.buf)
        }
    }
}

#[cfg(test)]
#[path = "tests/line_buffer.rs"]
mod tests;

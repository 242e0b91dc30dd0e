//! Line scanning over a buffered reader.
//!
//! [`LineScanner`] reads a `_redirects` stream lazily and yields only the
//! lines that can hold a rule, keeping track of where each one came from.

use super::error::ParseError;
use super::lexer::{is_blank_line, is_comment_line};
use super::span::Span;
use log::trace;
use std::io::BufRead;

/// A trimmed, non-blank, non-comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// The trimmed line text.
    pub text: String,
    /// Line number (1-based).
    pub line: usize,
    /// Byte offset of the start of the physical line.
    pub offset: usize,
    /// Byte offset of the trimmed text within the physical line.
    pub indent: usize,
    /// Column of the trimmed text (1-based, in characters).
    pub column: usize,
}

impl SourceLine {
    /// Returns the span covering the trimmed text.
    pub fn span(&self) -> Span {
        Span::new(
            self.offset + self.indent,
            self.line,
            self.column,
            self.text.len(),
        )
    }
}

/// Yields significant lines from a reader in file order.
///
/// After a read error the scanner yields that error once and then stops.
#[derive(Debug)]
pub struct LineScanner<R> {
    reader: R,
    buf: String,
    line: usize,
    offset: usize,
    done: bool,
}

impl<R: BufRead> LineScanner<R> {
    /// Creates a scanner over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
            offset: 0,
            done: false,
        }
    }

    /// Returns the number of physical lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Reads the next physical line into the buffer.
    ///
    /// Returns `Ok(None)` at end of input, otherwise the byte length consumed.
    fn read_physical_line(&mut self) -> Result<Option<usize>, ParseError> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => Ok(None),
            Ok(n) => {
                self.line += 1;
                Ok(Some(n))
            }
            Err(e) => Err(ParseError::read(self.line + 1, e)),
        }
    }
}

impl<R: BufRead> Iterator for LineScanner<R> {
    type Item = Result<SourceLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let consumed = match self.read_physical_line() {
                Ok(Some(n)) => n,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            };

            let line_offset = self.offset;
            self.offset += consumed;

            let raw = self.buf.as_str();
            if is_blank_line(raw) {
                trace!("Line {}: blank", self.line);
                continue;
            }
            if is_comment_line(raw) {
                trace!("Line {}: comment", self.line);
                continue;
            }

            let text = raw.trim();
            let indent = raw.len() - raw.trim_start().len();
            return Some(Ok(SourceLine {
                text: text.to_string(),
                line: self.line,
                offset: line_offset,
                indent,
                column: raw[..indent].chars().count() + 1,
            }));
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineScanner<R> {}

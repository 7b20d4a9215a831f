//! Line-by-line reading of calendar files.
//!
//! [`RecordReader`] wraps any [`BufRead`] and yields one parsed record per
//! line, lazily and in file order, tracking line numbers for error context.

use crate::error::ReadError;
use crate::record::{NameDay, parse_line};
use std::io::BufRead;

/// Lazy reader over calendar lines.
///
/// `RecordReader` is an [`Iterator`] of `Result<NameDay, ReadError>`. It reads
/// one line per call to `next`, so nothing is buffered beyond what the
/// underlying reader holds. After the first error it yields `None`: a calendar
/// that fails to parse has no meaningful remainder.
///
/// # Type Parameters
///
/// * `R` - The underlying buffered reader.
///
/// # Examples
///
/// ```
/// use nameday_format::RecordReader;
/// use std::io::Cursor;
///
/// let data = "2.1. Karina ZENA\n5.1. Dalimil MUZ\n";
/// let records: Result<Vec<_>, _> = RecordReader::new(Cursor::new(data)).collect();
/// assert_eq!(records.unwrap().len(), 2);
/// ```
pub struct RecordReader<R> {
    /// Source of lines.
    reader: R,
    /// Reusable line buffer.
    buf: String,
    /// Current line number (1-based counting, 0 before any lines are read) for error reporting.
    line_number: usize,
    /// Set once an error has been yielded.
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a new `RecordReader` reading from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_number: 0,
            failed: false,
        }
    }

    /// Returns the current line number.
    ///
    /// Returns 0 before any lines have been read. After reading, returns the
    /// 1-based line number of the last line read.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_record(&mut self) -> Option<Result<NameDay, ReadError>> {
        self.buf.clear();
        let line_number = self.line_number + 1;

        match self.reader.read_line(&mut self.buf) {
            Ok(0) => return None,
            Ok(_) => self.line_number = line_number,
            Err(source) => return Some(Err(ReadError::Io { line_number, source })),
        }

        let line = self.buf.trim_end_matches(['\n', '\r']);
        tracing::trace!(line_number, line, "Parsing calendar line");

        Some(parse_line(line).map_err(|source| ReadError::Malformed {
            line_number,
            line: line.to_string(),
            source,
        }))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<NameDay, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read_record();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl<R: BufRead> std::iter::FusedIterator for RecordReader<R> {}

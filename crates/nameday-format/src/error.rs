//! Error types for nameday-format operations.

use std::io;
use thiserror::Error;

/// A single line could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line did not split into exactly three tokens.
    #[error("expected 3 fields (date, name, gender), found {found}")]
    FieldCount {
        /// Number of whitespace-separated tokens on the line.
        found: usize,
    },

    /// The date token is not of the form `D.M.` or names a day that does not exist.
    #[error("invalid date '{token}', expected D.M. (e.g. 24.12.)")]
    InvalidDate {
        /// The offending token.
        token: String,
    },

    /// The gender token is neither `MUZ` nor `ZENA`.
    #[error("unknown gender '{token}', expected MUZ or ZENA")]
    UnknownGender {
        /// The offending token.
        token: String,
    },

    /// A name handed to [`NameDay::new`](crate::NameDay::new) is empty or
    /// contains whitespace.
    #[error("invalid name '{name}', expected a single non-empty token")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// The error type for [`RecordReader`](crate::RecordReader).
///
/// Both variants carry the 1-based line number where reading stopped.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("IO error at line {line_number}: {source}")]
    Io {
        /// Line that was being read when the failure happened.
        line_number: usize,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A line was read but did not parse.
    #[error("malformed record at line {line_number} ('{line}'): {source}")]
    Malformed {
        /// The 1-based line number.
        line_number: usize,
        /// The raw line content.
        line: String,
        /// Why the line was rejected.
        #[source]
        source: RecordError,
    },
}

impl ReadError {
    /// Returns the 1-based line number associated with this error.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Io { line_number, .. } | Self::Malformed { line_number, .. } => *line_number,
        }
    }
}

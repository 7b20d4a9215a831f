//! Error types for namedays operations.

use nameday_format::{ReadError, RecordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for loading and querying the calendar.
///
/// Neither variant is recoverable: the calendar is static reference data, so
/// a missing file or a bad line is a packaging defect rather than a runtime
/// condition to work around.
#[derive(Debug, Error)]
pub enum Error {
    /// The calendar file could not be opened or read.
    #[error("Calendar source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A line of the calendar file failed to parse.
    #[error("Malformed record at line {line_number} ('{line}'): {source}")]
    MalformedRecord {
        /// The 1-based line number.
        line_number: usize,
        /// The raw line content.
        line: String,
        /// Why the line was rejected.
        #[source]
        source: RecordError,
    },
}

impl Error {
    /// Attaches the source path to a reader error.
    pub(crate) fn from_read(path: PathBuf, err: ReadError) -> Self {
        match err {
            ReadError::Io { source, .. } => Self::SourceUnavailable { path, source },
            ReadError::Malformed {
                line_number,
                line,
                source,
            } => Self::MalformedRecord {
                line_number,
                line,
                source,
            },
        }
    }
}

/// A specialized Result type for namedays operations.
pub type Result<T> = std::result::Result<T, Error>;

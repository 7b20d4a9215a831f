//! Loading the calendar file.
//!
//! The calendar is read fresh on every call: there is no cache, so each
//! query sees its own independent copy of the records and parse errors
//! surface on every call, not just the first.
//!
//! The bundled calendar is compiled into the binary, so an installed or
//! relocated executable finds it without any files next to it. Other
//! calendars are read from disk.
//!
//! # Example
//!
//! ```
//! use namedays::dataset::DatasetSource;
//!
//! let records = DatasetSource::bundled().load_all()?;
//! println!("{} name days", records.len());
//! # Ok::<(), namedays::error::Error>(())
//! ```

use crate::error::{Error, Result};
use nameday_format::{NameDay, RecordReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name of the bundled calendar.
pub const DATASET_FILE_NAME: &str = "svatky.txt";

/// Name under which the bundled calendar appears in logs and errors.
pub const BUNDLED_SOURCE_NAME: &str = "<bundled>/svatky.txt";

const BUNDLED_CALENDAR: &str = include_str!("../data/svatky.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Bundled,
    File(PathBuf),
}

/// Where the calendar lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    origin: Origin,
}

impl DatasetSource {
    /// The calendar shipped inside the program.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    /// A calendar file at an arbitrary path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    /// The file this source reads from, or `None` for the bundled calendar.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::Bundled => None,
            Origin::File(path) => Some(path),
        }
    }

    /// Returns `true` for the calendar compiled into the program.
    #[must_use]
    pub fn is_bundled(&self) -> bool {
        self.origin == Origin::Bundled
    }

    /// The path reported in errors.
    fn source_name(&self) -> PathBuf {
        self.path()
            .map_or_else(|| PathBuf::from(BUNDLED_SOURCE_NAME), Path::to_path_buf)
    }

    /// Opens the source and returns a lazy, one-pass sequence of records in
    /// file order.
    ///
    /// A file stays open until the returned iterator is dropped. The
    /// sequence ends after the first error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceUnavailable`] if the file cannot be opened.
    /// Items are [`Error::MalformedRecord`] for a line that fails to parse and
    /// [`Error::SourceUnavailable`] if reading fails midway.
    pub fn records(&self) -> Result<impl Iterator<Item = Result<NameDay>> + use<>> {
        let reader: Box<dyn BufRead> = match &self.origin {
            Origin::Bundled => Box::new(BUNDLED_CALENDAR.as_bytes()),
            Origin::File(path) => {
                let file = File::open(path).map_err(|source| {
                    tracing::warn!(path = %path.display(), error = %source, "Cannot open calendar");
                    Error::SourceUnavailable {
                        path: path.clone(),
                        source,
                    }
                })?;
                Box::new(BufReader::new(file))
            }
        };

        let name = self.source_name();
        Ok(RecordReader::new(reader)
            .map(move |item| item.map_err(|err| Error::from_read(name.clone(), err))))
    }

    /// Reads and parses the whole source.
    ///
    /// All-or-nothing: a single bad line fails the load, and no partial result
    /// is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceUnavailable`] if the file cannot be opened or read
    /// - [`Error::MalformedRecord`] if any line fails to parse
    pub fn load_all(&self) -> Result<Vec<NameDay>> {
        tracing::debug!(source = %self.source_name().display(), "Loading name-day calendar");

        let records = self
            .records()?
            .collect::<Result<Vec<_>>>()
            .inspect_err(|err| tracing::warn!(error = %err, "Calendar load failed"))?;

        tracing::debug!(count = records.len(), "Loaded name-day calendar");
        Ok(records)
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::bundled()
    }
}

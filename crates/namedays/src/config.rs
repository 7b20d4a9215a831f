//! Configuration for the namedays binary.
//!
//! The calendar is compiled into the binary. The only override is the
//! `--data` flag, which points the CLI at another file in the same format.

use crate::dataset::DatasetSource;
use std::path::PathBuf;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the calendar is read from.
    pub dataset: DatasetSource,
}

impl Config {
    /// Builds the configuration, preferring `data_override` over the bundled file.
    pub fn load(data_override: Option<PathBuf>) -> Self {
        let dataset = match data_override {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using calendar from --data");
                DatasetSource::from_path(path)
            }
            None => DatasetSource::bundled(),
        };
        Self { dataset }
    }
}

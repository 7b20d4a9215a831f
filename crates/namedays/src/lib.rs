//! Namedays - read-only queries over the Czech name-day calendar.
//!
//! This crate provides both a CLI application and a library. The library
//! loads the calendar file fresh for every query and exposes small
//! filter/map/count pipelines over it.
//!
//! - [`dataset`]: locating and loading the calendar file
//! - [`query`]: the pipelines, usable over any sequence of records
//! - [`calendar`]: the pipelines bound to a calendar source

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod calendar;
pub mod dataset;
pub mod error;
pub mod query;

// Public CLI module (needed by binary)
pub mod cli;

pub mod output;

// Internal modules (not exposed as public API)
pub(crate) mod config;

pub use calendar::Calendar;
pub use dataset::DatasetSource;
pub use error::{Error, Result};
pub use nameday_format::{Gender, MonthDay, NameDay};

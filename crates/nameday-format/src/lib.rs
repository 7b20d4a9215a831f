//! Parser and line reader for the plain-text name-day calendar format.
//!
//! Each line of a calendar file holds exactly one record made of three
//! whitespace-separated tokens:
//!
//! ```text
//! <day>.<month>. <name> <gender>
//! ```
//!
//! For example `3.2. Blažena ZENA`. The gender token is `MUZ` (male) or
//! `ZENA` (female), matched case-insensitively.
//!
//! # Examples
//!
//! ```
//! use nameday_format::{parse_line, Gender};
//!
//! let record = parse_line("24.6. Jan MUZ").unwrap();
//! assert_eq!(record.name(), "Jan");
//! assert_eq!(record.day().to_string(), "24.6.");
//! assert_eq!(record.gender(), Gender::Male);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod record;

pub use error::{ReadError, RecordError};
pub use reader::RecordReader;
pub use record::{Gender, MonthDay, NameDay, parse_line};

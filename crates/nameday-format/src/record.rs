//! Record types and the single-line parser.
//!
//! A [`NameDay`] ties a calendar day ([`MonthDay`]) to a name and a
//! [`Gender`]. Records are immutable once constructed; the only way to get
//! one is through [`parse_line`] or the validating [`NameDay::new`].

use crate::error::RecordError;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Year used to validate month/day pairs. A leap year, so `29.2.` is accepted.
const REFERENCE_YEAR: i32 = 2000;

/// A day of the year without a year component.
///
/// Ordering follows the calendar: first by month, then by day of month.
/// The textual form is `D.M.` (e.g. `24.12.`), without leading zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    date: NaiveDate,
}

impl MonthDay {
    /// Creates a month/day pair, returning `None` if the combination does not
    /// exist in the calendar (e.g. 30 February).
    ///
    /// `month` is 1-based.
    #[must_use]
    pub const fn new(month: u32, day: u32) -> Option<Self> {
        match NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day) {
            Some(date) => Some(Self { date }),
            None => None,
        }
    }

    /// Returns the month.
    #[must_use]
    pub fn month(&self) -> Month {
        (0..self.date.month0()).fold(Month::January, |month, _| month.succ())
    }

    /// Returns the day of the month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns `true` if `self` comes strictly before `other` in the calendar.
    #[must_use]
    pub fn is_before(&self, other: &MonthDay) -> bool {
        self < other
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.", self.date.day(), self.date.month())
    }
}

impl FromStr for MonthDay {
    type Err = RecordError;

    /// Parses the `D.M.` form: one or two digits for the day, a dot, one or
    /// two digits for the month, and a trailing dot.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidDate {
            token: token.to_string(),
        };

        let body = token.strip_suffix('.').ok_or_else(invalid)?;
        let (day, month) = body.split_once('.').ok_or_else(invalid)?;
        let day = parse_component(day).ok_or_else(invalid)?;
        let month = parse_component(month).ok_or_else(invalid)?;

        MonthDay::new(month, day).ok_or_else(invalid)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_component(digits: &str) -> Option<u32> {
    if !(1..=2).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Gender tag of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Written as `MUZ` in calendar files.
    Male,
    /// Written as `ZENA` in calendar files.
    Female,
}

impl Gender {
    /// The canonical token used in calendar files.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Male => "MUZ",
            Self::Female => "ZENA",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Gender {
    type Err = RecordError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        [Self::Male, Self::Female]
            .into_iter()
            .find(|gender| token.eq_ignore_ascii_case(gender.token()))
            .ok_or_else(|| RecordError::UnknownGender {
                token: token.to_string(),
            })
    }
}

/// One entry of the name-day calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameDay {
    day: MonthDay,
    name: String,
    gender: Gender,
}

impl NameDay {
    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidName`] if `name` is empty or contains
    /// ASCII whitespace, since such a name could not be written back as one
    /// token.
    pub fn new(day: MonthDay, name: impl Into<String>, gender: Gender) -> Result<Self, RecordError> {
        let name = name.into();
        if name.is_empty() || name.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(RecordError::InvalidName { name });
        }
        Ok(Self { day, name, gender })
    }

    /// The day the name is celebrated.
    #[must_use]
    pub fn day(&self) -> MonthDay {
        self.day
    }

    /// The name, exactly as written in the source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gender tag.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Consumes the record, returning just the name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Formats the record as a calendar file line, e.g. `24.6. Jan MUZ`.
impl fmt::Display for NameDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.name, self.gender)
    }
}

/// Parses one calendar line into a record.
///
/// The line must split on ASCII whitespace into exactly three tokens: a
/// `D.M.` date, a name, and a gender token (`MUZ` or `ZENA`, any case). The
/// name is kept verbatim, so other Unicode spaces such as U+00A0 stay part of
/// it.
///
/// # Errors
///
/// - [`RecordError::FieldCount`] if the token count is not 3 (blank lines included)
/// - [`RecordError::InvalidDate`] if the date token does not parse or is not a real day
/// - [`RecordError::UnknownGender`] if the gender token is not recognised
///
/// # Examples
///
/// ```
/// use nameday_format::{parse_line, RecordError};
///
/// assert!(parse_line("3.2. Blažena ZENA").is_ok());
/// assert!(matches!(
///     parse_line("30.2. Nikdo MUZ"),
///     Err(RecordError::InvalidDate { .. })
/// ));
/// ```
pub fn parse_line(line: &str) -> Result<NameDay, RecordError> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let [date, name, gender] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    Ok(NameDay {
        day: date.parse()?,
        name: (*name).to_string(),
        gender: gender.parse()?,
    })
}

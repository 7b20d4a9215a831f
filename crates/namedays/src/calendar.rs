//! The query facade over a calendar source.
//!
//! Each method loads the calendar from its [`DatasetSource`] and runs one
//! pipeline from [`crate::query`] over the fresh records. Nothing is cached
//! between calls.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Month;
//! use namedays::calendar::Calendar;
//!
//! let calendar = Calendar::bundled();
//! for name in calendar.female_names_in_month(Month::May)? {
//!     println!("{name}");
//! }
//! # Ok::<(), namedays::error::Error>(())
//! ```

use crate::dataset::DatasetSource;
use crate::error::Result;
use crate::query;
use chrono::Month;
use nameday_format::{MonthDay, NameDay};

/// Read-only queries over a name-day calendar.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    source: DatasetSource,
}

impl Calendar {
    /// Creates a calendar reading from `source`.
    #[must_use]
    pub fn new(source: DatasetSource) -> Self {
        Self { source }
    }

    /// Creates a calendar over the bundled data file.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(DatasetSource::bundled())
    }

    /// The source this calendar reads from.
    #[must_use]
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    // Every method below fails with the loader's errors: `SourceUnavailable`
    // if the file cannot be read, `MalformedRecord` if any line is bad.

    /// Every record, in file order.
    pub fn all(&self) -> Result<impl Iterator<Item = NameDay> + use<>> {
        Ok(self.source.load_all()?.into_iter())
    }

    /// Records celebrated in `month`.
    pub fn by_month(&self, month: Month) -> Result<impl Iterator<Item = NameDay> + use<>> {
        Ok(query::by_month(self.source.load_all()?, month))
    }

    /// Names celebrated in `month`.
    pub fn names_in_month(&self, month: Month) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::names_in_month(self.source.load_all()?, month))
    }

    /// Days on which `name` is celebrated.
    pub fn day_of_name<'a>(
        &self,
        name: &'a str,
    ) -> Result<impl Iterator<Item = MonthDay> + use<'a>> {
        Ok(query::day_of_name(self.source.load_all()?, name))
    }

    /// All male names.
    pub fn male_names(&self) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::male_names(self.source.load_all()?))
    }

    /// All female names.
    pub fn female_names(&self) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::female_names(self.source.load_all()?))
    }

    /// Names celebrated on `day`.
    pub fn names_on_day(&self, day: MonthDay) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::names_on_day(self.source.load_all()?, day))
    }

    /// Female names celebrated in `month`.
    pub fn female_names_in_month(
        &self,
        month: Month,
    ) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::female_names_in_month(self.source.load_all()?, month))
    }

    /// Number of male names celebrated on the first of a month.
    pub fn count_male_first_of_month(&self) -> Result<usize> {
        Ok(query::count_male_first_of_month(self.source.load_all()?))
    }

    /// Distinct names in first-occurrence order.
    pub fn unique_names(&self) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::unique_names(self.source.load_all()?))
    }

    /// Number of distinct names.
    pub fn count_unique_names(&self) -> Result<usize> {
        Ok(query::count_unique_names(self.source.load_all()?))
    }

    /// June names minus the first ten.
    pub fn names_in_june_skip_first_ten(&self) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::names_in_june_skip_first_ten(self.source.load_all()?))
    }

    /// Names from Christmas Eve to the end of the calendar.
    ///
    /// Assumes the file is sorted by day; see
    /// [`query::names_from_christmas_onward`].
    pub fn names_from_christmas_onward(&self) -> Result<impl Iterator<Item = String> + use<>> {
        Ok(query::names_from_christmas_onward(self.source.load_all()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn calendar_with(contents: &str) -> (NamedTempFile, Calendar) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        let calendar = Calendar::new(DatasetSource::from_path(file.path()));
        (file, calendar)
    }

    const SMALL: &str = "3.2. Blažena ZENA\n24.6. Jan MUZ\n25.12. Štěpán MUZ\n";

    #[test]
    fn queries_run_over_the_file() {
        let (_file, calendar) = calendar_with(SMALL);

        let june: Vec<_> = calendar
            .by_month(Month::June)
            .unwrap()
            .map(NameDay::into_name)
            .collect();
        assert_eq!(june, ["Jan"]);

        let days: Vec<_> = calendar.day_of_name("Jan").unwrap().collect();
        assert_eq!(days, [MonthDay::new(6, 24).unwrap()]);

        assert_eq!(calendar.count_male_first_of_month().unwrap(), 0);
        assert_eq!(calendar.count_unique_names().unwrap(), 3);
        assert_eq!(calendar.all().unwrap().count(), 3);
    }

    #[test]
    fn every_call_rereads_the_file() {
        let (mut file, calendar) = calendar_with(SMALL);
        assert_eq!(calendar.male_names().unwrap().count(), 2);

        file.write_all(b"26.12. Stepan MUZ\n").unwrap();
        file.flush().unwrap();
        assert_eq!(calendar.male_names().unwrap().count(), 3);
    }

    #[test]
    fn malformed_file_fails_every_query() {
        let (_file, calendar) = calendar_with("3.2. Blažena ZENA\n24.6. Jan NEVIM\n");

        assert!(matches!(
            calendar.female_names(),
            Err(Error::MalformedRecord { line_number: 2, .. })
        ));
        assert!(matches!(
            calendar.count_unique_names(),
            Err(Error::MalformedRecord { line_number: 2, .. })
        ));
    }

    #[test]
    fn results_outlive_the_calendar() {
        let (_file, calendar) = calendar_with(SMALL);
        let name = String::from("Jan");

        let names = Calendar::new(calendar.source().clone()).male_names().unwrap();
        let days = Calendar::new(calendar.source().clone())
            .day_of_name(&name)
            .unwrap();
        drop(calendar);

        assert_eq!(names.collect::<Vec<_>>(), ["Jan", "Štěpán"]);
        assert_eq!(days.collect::<Vec<_>>(), [MonthDay::new(6, 24).unwrap()]);
    }

    #[test]
    fn missing_file_fails_with_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let calendar = Calendar::new(DatasetSource::from_path(dir.path().join("none.txt")));

        assert!(matches!(
            calendar.names_from_christmas_onward(),
            Err(Error::SourceUnavailable { .. })
        ));
    }
}

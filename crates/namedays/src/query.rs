//! Query combinators over name-day records.
//!
//! Every function takes any sequence of [`NameDay`] records and returns a lazy
//! iterator (or a count). All of them are filter/map/reduce pipelines that
//! keep the input order and never look at a record twice.
//!
//! [`Calendar`](crate::calendar::Calendar) wires these to a freshly loaded
//! calendar; they are kept separate so they can run over in-memory data.

use chrono::Month;
use nameday_format::{Gender, MonthDay, NameDay};
use std::collections::HashSet;

/// Number of June names dropped by [`names_in_june_skip_first_ten`].
pub const JUNE_SKIP: usize = 10;

/// First day taken by [`names_from_christmas_onward`].
pub const CHRISTMAS_EVE: MonthDay = match MonthDay::new(12, 24) {
    Some(day) => day,
    None => panic!("24.12. is a calendar day"),
};

/// Records whose day falls in `month`.
pub fn by_month<I>(records: I, month: Month) -> impl Iterator<Item = NameDay>
where
    I: IntoIterator<Item = NameDay>,
{
    records.into_iter().filter(move |r| r.day().month() == month)
}

/// Names of the records whose day falls in `month`.
pub fn names_in_month<I>(records: I, month: Month) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    by_month(records, month).map(NameDay::into_name)
}

/// Every day on which `name` is celebrated. Exact, case-sensitive match.
pub fn day_of_name<I>(records: I, name: &str) -> impl Iterator<Item = MonthDay>
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .filter(move |r| r.name() == name)
        .map(|r| r.day())
}

/// Names tagged with `gender`.
pub fn names_by_gender<I>(records: I, gender: Gender) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .filter(move |r| r.gender() == gender)
        .map(NameDay::into_name)
}

/// All male names.
pub fn male_names<I>(records: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    names_by_gender(records, Gender::Male)
}

/// All female names.
pub fn female_names<I>(records: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    names_by_gender(records, Gender::Female)
}

/// Names celebrated exactly on `day`.
pub fn names_on_day<I>(records: I, day: MonthDay) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .filter(move |r| r.day() == day)
        .map(NameDay::into_name)
}

/// Female names celebrated in `month`.
pub fn female_names_in_month<I>(records: I, month: Month) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .filter(|r| r.gender() == Gender::Female)
        .filter(move |r| r.day().month() == month)
        .map(NameDay::into_name)
}

/// Number of male records that fall on the first day of a month.
pub fn count_male_first_of_month<I>(records: I) -> usize
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .filter(|r| r.gender() == Gender::Male)
        .filter(|r| r.day().day() == 1)
        .count()
}

/// Names with duplicates removed, each kept at its first occurrence.
pub fn unique_names<I>(records: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(NameDay::into_name)
        .filter(move |name| seen.insert(name.clone()))
}

/// Number of distinct names.
pub fn count_unique_names<I>(records: I) -> usize
where
    I: IntoIterator<Item = NameDay>,
{
    unique_names(records).count()
}

/// June names after the first [`JUNE_SKIP`] of them. Empty when June has
/// fewer names than that.
pub fn names_in_june_skip_first_ten<I>(records: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    names_in_month(records, Month::June).skip(JUNE_SKIP)
}

/// Names from the first record on or after 24 December to the end.
///
/// This drops the leading run of records dated before Christmas Eve and then
/// takes everything that follows, whatever its date. On a calendar sorted by
/// day that equals "every name from 24.12. on"; on unsorted input a later
/// record dated before 24.12. is still returned.
pub fn names_from_christmas_onward<I>(records: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = NameDay>,
{
    records
        .into_iter()
        .skip_while(|r| r.day().is_before(&CHRISTMAS_EVE))
        .map(NameDay::into_name)
}

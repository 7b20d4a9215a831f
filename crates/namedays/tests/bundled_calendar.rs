//! Tests against the calendar file shipped with the crate.

use chrono::Month;
use namedays::query;
use namedays::{Calendar, DatasetSource, Gender, MonthDay, NameDay};
use rstest::{fixture, rstest};
use std::collections::HashSet;

#[fixture]
fn calendar() -> Calendar {
    Calendar::bundled()
}

fn md(month: u32, day: u32) -> MonthDay {
    MonthDay::new(month, day).unwrap()
}

#[rstest]
fn bundled_calendar_loads(calendar: Calendar) {
    let records: Vec<NameDay> = calendar.all().unwrap().collect();
    assert_eq!(records.len(), 372);
}

#[rstest]
fn bundled_calendar_is_sorted_by_day(calendar: Calendar) {
    let days: Vec<MonthDay> = calendar.all().unwrap().map(|r| r.day()).collect();
    assert!(days.windows(2).all(|w| w[0] <= w[1]));
}

#[rstest]
fn gender_lists_cover_all_names(calendar: Calendar) {
    let all: HashSet<String> = calendar.all().unwrap().map(NameDay::into_name).collect();
    let male: HashSet<String> = calendar.male_names().unwrap().collect();
    let female: HashSet<String> = calendar.female_names().unwrap().collect();

    let union: HashSet<String> = male.union(&female).cloned().collect();
    assert_eq!(union, all);
    assert!(male.is_disjoint(&female));

    assert_eq!(calendar.male_names().unwrap().count(), 190);
    assert_eq!(calendar.female_names().unwrap().count(), 182);
}

#[rstest]
fn unique_names_match_a_set(calendar: Calendar) {
    let set: HashSet<String> = calendar.all().unwrap().map(NameDay::into_name).collect();
    assert_eq!(calendar.count_unique_names().unwrap(), set.len());
    assert_eq!(set.len(), 371);
}

#[rstest]
fn petr_has_two_name_days(calendar: Calendar) {
    let days: Vec<MonthDay> = calendar.day_of_name("Petr").unwrap().collect();
    assert_eq!(days, [md(2, 22), md(6, 29)]);
}

#[rstest]
#[case::single("Jan", md(6, 24))]
#[case::leap_day("Horymír", md(2, 29))]
#[case::diacritics("Štěpán", md(12, 26))]
fn day_of_name_finds_known_names(calendar: Calendar, #[case] name: &str, #[case] day: MonthDay) {
    let days: Vec<MonthDay> = calendar.day_of_name(name).unwrap().collect();
    assert_eq!(days, [day]);
}

#[rstest]
fn unknown_name_has_no_day(calendar: Calendar) {
    assert_eq!(calendar.day_of_name("Nikdo").unwrap().count(), 0);
}

#[rstest]
fn christmas_eve_has_two_names(calendar: Calendar) {
    let names: Vec<String> = calendar.names_on_day(md(12, 24)).unwrap().collect();
    assert_eq!(names, ["Adam", "Eva"]);
}

#[rstest]
fn female_names_in_may(calendar: Calendar) {
    let names: Vec<String> = calendar.female_names_in_month(Month::May).unwrap().collect();
    assert_eq!(
        names,
        ["Klaudie", "Blažena", "Svatava", "Žofie", "Aneta", "Nataša", "Monika", "Jana", "Viola", "Kamila"]
    );
}

#[rstest]
fn male_names_on_the_first(calendar: Calendar) {
    // Hynek, Bedřich, Hugo, Oskar, Samuel, Igor, Felix
    assert_eq!(calendar.count_male_first_of_month().unwrap(), 7);
}

#[rstest]
fn june_without_first_ten(calendar: Calendar) {
    let names: Vec<String> = calendar.names_in_june_skip_first_ten().unwrap().collect();
    assert_eq!(names.len(), 22);
    assert_eq!(names.first().map(String::as_str), Some("Gita"));
    assert_eq!(names.last().map(String::as_str), Some("Šárka"));
}

#[rstest]
fn christmas_onward_matches_date_filter_on_sorted_data(calendar: Calendar) {
    let names: Vec<String> = calendar.names_from_christmas_onward().unwrap().collect();
    assert_eq!(
        names,
        ["Adam", "Eva", "Štěpán", "Žaneta", "Bohumila", "Judita", "David", "Silvestr"]
    );

    let filtered: Vec<String> = calendar
        .all()
        .unwrap()
        .filter(|r| !r.day().is_before(&md(12, 24)))
        .map(NameDay::into_name)
        .collect();
    assert_eq!(names, filtered);
}

#[rstest]
fn november_names(calendar: Calendar) {
    let names: Vec<String> = calendar.names_in_month(Month::November).unwrap().collect();
    assert_eq!(names.len(), 29);
    assert_eq!(names.first().map(String::as_str), Some("Felix"));
}

#[rstest]
fn every_month_has_names(calendar: Calendar) {
    let records: Vec<NameDay> = calendar.all().unwrap().collect();
    for month in [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ] {
        assert!(
            query::by_month(records.iter().cloned(), month).next().is_some(),
            "{month:?} has no name days"
        );
    }
}

#[test]
fn default_source_is_the_bundled_file() {
    assert_eq!(DatasetSource::default(), DatasetSource::bundled());
    assert!(DatasetSource::bundled().is_bundled());
}

#[test]
fn gender_tags_are_two_valued() {
    let genders: HashSet<Gender> = Calendar::bundled()
        .all()
        .unwrap()
        .map(|r| r.gender())
        .collect();
    assert_eq!(genders.len(), 2);
}

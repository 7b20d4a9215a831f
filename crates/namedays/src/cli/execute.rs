//! Command execution logic.
//!
//! Each command runs one calendar query and hands the result to the output
//! layer. Queries load the calendar themselves, so every command reads the
//! file afresh.

use anyhow::Result;
use chrono::Month;

use super::args::{DayOfArgs, MonthArgs, NamesArgs, OnArgs};
use crate::calendar::Calendar;
use crate::output::{self, CalendarStats, OutputMode};
use crate::query;
use nameday_format::Gender;

/// Execute the month command
pub fn execute_month(calendar: &Calendar, args: &MonthArgs, output_mode: OutputMode) -> Result<()> {
    if args.female {
        let names: Vec<String> = calendar.female_names_in_month(args.month)?.collect();
        output::print_names(&names, output_mode)?;
    } else {
        let records: Vec<_> = calendar.by_month(args.month)?.collect();
        output::print_records(&records, output_mode)?;
    }
    Ok(())
}

/// Execute the day-of command
pub fn execute_day_of(calendar: &Calendar, args: &DayOfArgs, output_mode: OutputMode) -> Result<()> {
    let days: Vec<_> = calendar.day_of_name(&args.name)?.collect();
    tracing::debug!(name = %args.name, matches = days.len(), "Looked up name");
    output::print_days(&args.name, &days, output_mode)?;
    Ok(())
}

/// Execute the names command
pub fn execute_names(calendar: &Calendar, args: &NamesArgs, output_mode: OutputMode) -> Result<()> {
    let names: Vec<String> = match Gender::from(args.gender) {
        Gender::Male => calendar.male_names()?.collect(),
        Gender::Female => calendar.female_names()?.collect(),
    };
    output::print_names(&names, output_mode)?;
    Ok(())
}

/// Execute the on command
pub fn execute_on(calendar: &Calendar, args: &OnArgs, output_mode: OutputMode) -> Result<()> {
    let names: Vec<String> = calendar.names_on_day(args.day)?.collect();
    output::print_names(&names, output_mode)?;
    Ok(())
}

/// Execute the june command
pub fn execute_june(calendar: &Calendar, output_mode: OutputMode) -> Result<()> {
    let names: Vec<String> = calendar.names_in_june_skip_first_ten()?.collect();
    output::print_names(&names, output_mode)?;
    Ok(())
}

/// Execute the christmas command
pub fn execute_christmas(calendar: &Calendar, output_mode: OutputMode) -> Result<()> {
    let names: Vec<String> = calendar.names_from_christmas_onward()?.collect();
    output::print_names(&names, output_mode)?;
    Ok(())
}

/// Execute the november command
pub fn execute_november(calendar: &Calendar, output_mode: OutputMode) -> Result<()> {
    let names: Vec<String> = calendar.names_in_month(Month::November)?.collect();
    output::print_names(&names, output_mode)?;
    Ok(())
}

/// Execute the unique command
pub fn execute_unique(calendar: &Calendar, output_mode: OutputMode) -> Result<()> {
    let count = calendar.count_unique_names()?;
    output::print_count("unique_names", "Unique names", count, output_mode)?;
    Ok(())
}

/// Execute the stats command
///
/// Loads the calendar once and runs every counting pipeline over that copy.
pub fn execute_stats(calendar: &Calendar, output_mode: OutputMode) -> Result<()> {
    let records: Vec<_> = calendar.all()?.collect();
    let each = || records.iter().cloned();

    let stats = CalendarStats {
        records: records.len(),
        unique_names: query::count_unique_names(each()),
        male: query::male_names(each()).count(),
        female: query::female_names(each()).count(),
        male_first_of_month: query::count_male_first_of_month(each()),
    };

    output::print_stats(&stats, output_mode)?;
    Ok(())
}

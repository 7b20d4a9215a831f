//! Output formatting for CLI commands.
//!
//! Every command prints either human-readable text or JSON. The `write_*`
//! functions take any [`Write`] so they can be tested against a buffer; the
//! `print_*` wrappers send to stdout.

mod color;

use color::{colorize_count, colorize_day, colorize_gender, colorize_name, dimmed};
use nameday_format::{MonthDay, NameDay};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `NAMEDAYS_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("NAMEDAYS_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self { use_colors }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Summary figures for the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarStats {
    /// Number of records in the calendar.
    pub records: usize,
    /// Number of distinct names.
    pub unique_names: usize,
    /// Records tagged male.
    pub male: usize,
    /// Records tagged female.
    pub female: usize,
    /// Male records on the first day of a month.
    pub male_first_of_month: usize,
}

/// Days on which one name is celebrated, for JSON output.
#[derive(Serialize)]
struct NameDays<'a> {
    name: &'a str,
    days: &'a [MonthDay],
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print a list of names, one per line.
pub fn print_names(names: &[String], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => write_names_text(&mut handle, names, &config),
        OutputMode::Json => write_json(&mut handle, &names),
    }
}

/// Print full records (day, name, gender).
pub fn print_records(records: &[NameDay], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => write_records_text(&mut handle, records, &config),
        OutputMode::Json => write_json(&mut handle, &records),
    }
}

/// Print the days on which `name` is celebrated.
pub fn print_days(name: &str, days: &[MonthDay], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => write_days_text(&mut handle, name, days, &config),
        OutputMode::Json => write_json(&mut handle, &NameDays { name, days }),
    }
}

/// Print a single count, labelled `label` in text and keyed by `key` in JSON.
pub fn print_count(key: &str, label: &str, count: usize, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => writeln!(
            handle,
            "{} {}",
            dimmed(&format!("{label}:"), &config),
            colorize_count(count, &config)
        ),
        OutputMode::Json => write_json(&mut handle, &serde_json::json!({ key: count })),
    }
}

/// Print calendar statistics.
pub fn print_stats(stats: &CalendarStats, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => write_stats_text(&mut handle, stats, &config),
        OutputMode::Json => write_json(&mut handle, stats),
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

fn write_names_text<W: Write>(w: &mut W, names: &[String], config: &OutputConfig) -> io::Result<()> {
    if names.is_empty() {
        return writeln!(w, "{}", dimmed("No names found", config));
    }
    for name in names {
        writeln!(w, "{}", colorize_name(name, config))?;
    }
    Ok(())
}

fn write_records_text<W: Write>(
    w: &mut W,
    records: &[NameDay],
    config: &OutputConfig,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(w, "{}", dimmed("No name days found", config));
    }
    for record in records {
        writeln!(
            w,
            "{} {} {}",
            colorize_day(record.day(), config),
            colorize_name(record.name(), config),
            colorize_gender(record.gender(), config)
        )?;
    }
    Ok(())
}

fn write_days_text<W: Write>(
    w: &mut W,
    name: &str,
    days: &[MonthDay],
    config: &OutputConfig,
) -> io::Result<()> {
    if days.is_empty() {
        return writeln!(
            w,
            "{}",
            dimmed(&format!("{name} has no name day in the calendar"), config)
        );
    }
    for day in days {
        writeln!(
            w,
            "{} {}",
            colorize_day(*day, config),
            colorize_name(name, config)
        )?;
    }
    Ok(())
}

fn write_stats_text<W: Write>(
    w: &mut W,
    stats: &CalendarStats,
    config: &OutputConfig,
) -> io::Result<()> {
    let rows = [
        ("Records", stats.records),
        ("Unique names", stats.unique_names),
        ("Male", stats.male),
        ("Female", stats.female),
        ("Male on the 1st", stats.male_first_of_month),
    ];
    for (label, value) in rows {
        writeln!(
            w,
            "{} {}",
            dimmed(&format!("{label:<16}"), config),
            colorize_count(value, config)
        )?;
    }
    Ok(())
}

// ============================================================================
// JSON Formatting
// ============================================================================

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for namedays using clap's
//! derive API. It is a thin adapter: every command maps to one calendar query
//! and prints what the query returns.
//!
//! # Commands
//!
//! - `month`: Name days in a month (optionally female names only)
//! - `day-of`: Days on which a name is celebrated
//! - `names`: All male or all female names
//! - `on`: Names celebrated on a given day
//! - `june`: June names after the first ten
//! - `christmas`: Names from Christmas Eve to the end of the year
//! - `november`: November names
//! - `unique`: Number of distinct names
//! - `stats`: Summary figures
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--data <PATH>`: Read another calendar file instead of the bundled one
//!
//! # Example
//!
//! ```bash
//! namedays month 6 --female
//! namedays day-of Petr
//! namedays on 24.12.
//! namedays --json stats
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{DayOfArgs, GenderArg, MonthArgs, NamesArgs, OnArgs};

// Re-export validators for external use
pub use validators::{validate_day, validate_month, validate_name};

/// Namedays - queries over the Czech name-day calendar
///
/// Answers which names are celebrated when, reading the calendar file
/// afresh for every command.
#[derive(Parser, Debug)]
#[command(name = "namedays")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Calendar file to read instead of the bundled one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List name days in a month
    ///
    /// Prints day, name and gender for every record in the month. With
    /// `--female` only the female names are printed.
    Month(MonthArgs),

    /// Show the days on which a name is celebrated
    ///
    /// Matching is exact and case-sensitive. A name may appear on several days.
    DayOf(DayOfArgs),

    /// List all male or all female names
    Names(NamesArgs),

    /// List names celebrated on a day
    On(OnArgs),

    /// List June names, skipping the first ten
    June,

    /// List names from Christmas Eve (24.12.) to the end of the calendar
    Christmas,

    /// List names celebrated in November
    November,

    /// Count distinct names
    Unique,

    /// Show calendar statistics
    Stats,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::calendar::Calendar;
        use crate::config::Config;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        let config = Config::load(self.data.clone());
        let calendar = Calendar::new(config.dataset);

        match &self.command {
            Some(Commands::Month(args)) => execute::execute_month(&calendar, args, output_mode),
            Some(Commands::DayOf(args)) => execute::execute_day_of(&calendar, args, output_mode),
            Some(Commands::Names(args)) => execute::execute_names(&calendar, args, output_mode),
            Some(Commands::On(args)) => execute::execute_on(&calendar, args, output_mode),
            Some(Commands::June) => execute::execute_june(&calendar, output_mode),
            Some(Commands::Christmas) => execute::execute_christmas(&calendar, output_mode),
            Some(Commands::November) => execute::execute_november(&calendar, output_mode),
            Some(Commands::Unique) => execute::execute_unique(&calendar, output_mode),
            Some(Commands::Stats) => execute::execute_stats(&calendar, output_mode),
            None => {
                println!("Namedays - Czech name-day calendar");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

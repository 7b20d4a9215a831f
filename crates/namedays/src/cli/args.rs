//! Command argument structs.

use chrono::Month;
use clap::{Parser, ValueEnum};
use nameday_format::{Gender, MonthDay};

use super::validators::{validate_day, validate_month, validate_name};

/// Arguments for the `month` command
#[derive(Parser, Debug, Clone)]
pub struct MonthArgs {
    /// Month as a number (1-12) or an English name
    #[arg(value_parser = validate_month)]
    pub month: Month,

    /// Only list female names
    #[arg(short, long)]
    pub female: bool,
}

/// Arguments for the `day-of` command
#[derive(Parser, Debug, Clone)]
pub struct DayOfArgs {
    /// Name to look up (exact, case-sensitive)
    #[arg(value_parser = validate_name)]
    pub name: String,
}

/// Arguments for the `names` command
#[derive(Parser, Debug, Clone)]
pub struct NamesArgs {
    /// Which names to list
    #[arg(short, long, value_enum)]
    pub gender: GenderArg,
}

/// Arguments for the `on` command
#[derive(Parser, Debug, Clone)]
pub struct OnArgs {
    /// Day in D.M. form, e.g. 24.12.
    #[arg(value_parser = validate_day)]
    pub day: MonthDay,
}

/// Gender for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    /// Male names
    #[value(alias = "muz")]
    Male,
    /// Female names
    #[value(alias = "zena")]
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

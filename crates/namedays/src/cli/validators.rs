//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use chrono::Month;
use nameday_format::MonthDay;

/// Validate a month given as a number (1-12) or an English name.
///
/// Examples: `6`, `june`, `Jun`
pub fn validate_month(s: &str) -> Result<Month, String> {
    let s = s.trim();

    if let Ok(number) = s.parse::<u8>() {
        return Month::try_from(number)
            .map_err(|_| format!("Month must be between 1 and 12, got {number}"));
    }

    s.parse::<Month>()
        .map_err(|_| format!("Invalid month '{s}'. Use 1-12 or an English month name"))
}

/// Validate a day in the calendar's own `D.M.` form.
///
/// The trailing dot may be omitted on the command line: `24.12` and `24.12.`
/// are both accepted.
pub fn validate_day(s: &str) -> Result<MonthDay, String> {
    let s = s.trim();
    let token = if s.ends_with('.') {
        s.to_string()
    } else {
        format!("{s}.")
    };

    token.parse::<MonthDay>().map_err(|e| e.to_string())
}

/// Validate a name to look up.
///
/// Names are single tokens in the calendar, so whitespace can never match.
pub fn validate_name(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!("Name '{s}' cannot contain whitespace"));
    }

    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::number("6", Month::June)]
    #[case::padded(" 12 ", Month::December)]
    #[case::full_name("june", Month::June)]
    #[case::capitalized("November", Month::November)]
    #[case::short("dec", Month::December)]
    fn validate_month_valid(#[case] input: &str, #[case] expected: Month) {
        assert_eq!(validate_month(input).unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0", "between 1 and 12")]
    #[case::thirteen("13", "between 1 and 12")]
    #[case::garbage("summer", "invalid month")]
    #[case::empty("", "invalid month")]
    fn validate_month_invalid(#[case] input: &str, #[case] expected_error: &str) {
        let err = validate_month(input).unwrap_err().to_lowercase();
        assert!(
            err.contains(expected_error),
            "Expected error to contain '{}', got: '{}'",
            expected_error,
            err
        );
    }

    #[rstest]
    #[case::with_trailing_dot("24.12.", 12, 24)]
    #[case::without_trailing_dot("24.12", 12, 24)]
    #[case::single_digits("1.6", 6, 1)]
    fn validate_day_valid(#[case] input: &str, #[case] month: u32, #[case] day: u32) {
        assert_eq!(validate_day(input).unwrap(), MonthDay::new(month, day).unwrap());
    }

    #[rstest]
    #[case("30.2.")]
    #[case("24/12")]
    #[case("")]
    #[case("12")]
    fn validate_day_invalid(#[case] input: &str) {
        assert!(validate_day(input).is_err());
    }

    #[test]
    fn validate_name_trims() {
        assert_eq!(validate_name("  Jan ").unwrap(), "Jan");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("Jan Pavel")]
    fn validate_name_invalid(#[case] input: &str) {
        assert!(validate_name(input).is_err());
    }
}

//! Date helper functions

use chrono::NaiveDate;
use std::fmt::Write;

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2023-06-15"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    let mut out = String::new();
    // Unsupported specifiers make chrono's Display fail
    if write!(out, "{}", date.format(&chrono_format)).is_err() {
        tracing::warn!("Invalid date format '{}', using ISO dates", format);
        return iso_date(date);
    }
    out
}

/// Format date in full format (like "June 15, 2023")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date as stored in post records
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&june_15(), "YYYY-MM-DD"), "2023-06-15");
        assert_eq!(format_date(&june_15(), "YYYY/MM/DD"), "2023/06/15");
        assert_eq!(format_date(&june_15(), "MMMM D, YYYY"), "June 15, 2023");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&june_15()), "June 15, 2023");
        let date = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
        assert_eq!(full_date(&date), "March 5, 2023");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
    }
}

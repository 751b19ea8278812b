/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

use chrono::NaiveDate;

/// Format ISO date string to "Mon D, YYYY" display form
/// Example: "2024-03-15" -> "Mar 15, 2024"
///
/// Unparsable input is returned verbatim — authored content is trusted,
/// a bad date should not take the page down.
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2023-01-02"), "Jan 2, 2023");
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-13-99"), "2024-13-99");
    }
}

//! Field-format validation helpers shared by the entity schemas.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Wire format for event dates: two-digit day, two-digit month, four-digit
/// year.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("regex pattern is valid"));

/// Checks an email address against the `local@domain.tld` pattern.
///
/// Word characters, dots, and hyphens are accepted in the local and domain
/// parts; the final dot-separated segment must be word characters. No
/// further domain validation is performed.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Parses an event date in the fixed `DD-MM-YYYY` format.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Formats an event date back into the `DD-MM-YYYY` wire format.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a.b@c.org"));
        assert!(is_valid_email("first-last@mail.example.com"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(
            parse_event_date("31-12-2024"),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );

        assert!(parse_event_date("2024-12-31").is_none());
        assert!(parse_event_date("31-02-2024").is_none());
        assert!(parse_event_date("").is_none());
    }

    #[test]
    fn test_date_round_trip() {
        let date = parse_event_date("01-06-2025").unwrap();
        assert_eq!(format_event_date(date), "01-06-2025");
    }
}

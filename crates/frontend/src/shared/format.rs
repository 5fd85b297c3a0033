/// Display formatting for prices and timestamps
///
/// Keeps the whole app on one currency/date presentation.
use chrono::{DateTime, Utc};

/// Format a price in dollars: `49.9` -> `"$49.90"`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format an ISO timestamp as a short date: "Jan 15, 2024".
/// Unparseable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Format an ISO timestamp with time: "Jan 15, 2024 10:30"
pub fn format_datetime(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.with_timezone(&Utc).format("%b %d, %Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Short date from an already-typed timestamp
pub fn format_date_utc(dt: DateTime<Utc>) -> String {
    dt.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(49.9), "$49.90");
        assert_eq!(format_price(149.97), "$149.97");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_date("2024-11-24T00:00:00+00:00"), "Nov 24, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-01-15T10:30:00Z"), "Jan 15, 2024 10:30");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_datetime(""), "");
    }
}

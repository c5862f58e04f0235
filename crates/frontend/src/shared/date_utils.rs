//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the dashboard

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Format a UTC timestamp in the browser's local time as DD.MM.YYYY HH:MM
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    format_timestamp_in(dt, &Local)
}

/// Format a UTC timestamp as DD.MM.YYYY HH:MM in the given timezone
pub fn format_timestamp_in<Tz>(dt: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.with_timezone(tz).format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_in_utc() {
        let dt: DateTime<Utc> = "2024-03-15T14:02:26.123Z".parse().unwrap();
        assert_eq!(format_timestamp_in(dt, &Utc), "15.03.2024 14:02");
        let dt: DateTime<Utc> = "2024-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_timestamp_in(dt, &Utc), "31.12.2024 23:59");
    }

    #[test]
    fn test_format_timestamp_in_fixed_offset() {
        // Brasília, UTC-3
        let brt = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        let dt: DateTime<Utc> = "2024-03-15T02:30:00Z".parse().unwrap();
        assert_eq!(format_timestamp_in(dt, &brt), "14.03.2024 23:30");
    }
}

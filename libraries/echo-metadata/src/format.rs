//! Canonical string formatting for descriptive attributes.
//!
//! The catalog stores duration and file size as display strings, so the
//! formatting here is the persisted form, not a presentation concern.

use chrono::{NaiveDate, NaiveDateTime};
use echo_core::types::SENTINEL_RELEASE_DATE;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Fallback for a missing duration or file size
pub const UNKNOWN: &str = "Unknown";

/// Format a duration in milliseconds as `M:SS`.
///
/// Zero or missing durations become `"Unknown"`.
pub fn format_duration(millis: Option<u64>) -> String {
    match millis {
        Some(ms) if ms > 0 => {
            let minutes = ms / 60_000;
            let seconds = (ms % 60_000) / 1000;
            format!("{minutes}:{seconds:02}")
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Format a byte count as mebibytes rounded to two decimal places.
///
/// Trailing zeros are trimmed down to one decimal (`"2.0 MB"`, not
/// `"2.00 MB"`). Zero or missing sizes become `"Unknown"`.
pub fn format_file_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(b) if b > 0 => {
            let mib = b as f64 / BYTES_PER_MIB;
            let mut value = format!("{mib:.2}");
            while value.ends_with('0') {
                value.pop();
            }
            if value.ends_with('.') {
                value.push('0');
            }
            format!("{value} MB")
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Parse an embedded encoded-date tag into a release date.
///
/// The tag is commonly `"YYYY-MM-DD HH:MM:SS UTC"`; the time-zone token is
/// stripped before parsing. Absent or unparsable tags fall back to the
/// sentinel date, never an error.
pub fn parse_release_date(raw: Option<&str>) -> NaiveDate {
    let Some(raw) = raw else {
        return SENTINEL_RELEASE_DATE;
    };

    let trimmed = raw.strip_suffix(" UTC").unwrap_or(raw);

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .unwrap_or(SENTINEL_RELEASE_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_minutes_and_padded_seconds() {
        assert_eq!(format_duration(Some(125_000)), "2:05");
        assert_eq!(format_duration(Some(59_999)), "0:59");
        assert_eq!(format_duration(Some(3_600_000)), "60:00");
    }

    #[test]
    fn duration_missing_or_zero_is_unknown() {
        assert_eq!(format_duration(None), "Unknown");
        assert_eq!(format_duration(Some(0)), "Unknown");
    }

    #[test]
    fn file_size_trims_trailing_zeros() {
        assert_eq!(format_file_size(Some(2_097_152)), "2.0 MB");
        assert_eq!(format_file_size(Some(2_800_000)), "2.67 MB");
        assert_eq!(format_file_size(Some(5_242_880)), "5.0 MB");
    }

    #[test]
    fn file_size_missing_or_zero_is_unknown() {
        assert_eq!(format_file_size(None), "Unknown");
        assert_eq!(format_file_size(Some(0)), "Unknown");
    }

    #[test]
    fn release_date_strips_utc_suffix() {
        assert_eq!(
            parse_release_date(Some("2020-05-15 12:00:00 UTC")).to_string(),
            "2020-05-15"
        );
        assert_eq!(
            parse_release_date(Some("2020-05-15 12:00:00")).to_string(),
            "2020-05-15"
        );
    }

    #[test]
    fn release_date_falls_back_to_sentinel() {
        assert_eq!(parse_release_date(None), SENTINEL_RELEASE_DATE);
        assert_eq!(parse_release_date(Some("not a date")), SENTINEL_RELEASE_DATE);
        assert_eq!(parse_release_date(Some("2020-05-15")), SENTINEL_RELEASE_DATE);
    }
}

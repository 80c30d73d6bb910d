//! Locale-fixed timestamp formatting.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Formats an instant in Vietnamese medium date + medium time style, the
/// fixed format of the "last login" stamp.
///
/// Medium precision means day/month/year and hour:minute:second with no
/// sub-second component and no zone designator, e.g. `5 thg 6, 2024,
/// 14:30:00`.
#[must_use]
pub fn format_last_login<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format!(
        "{} thg {}, {}, {:02}:{:02}:{:02}",
        instant.day(),
        instant.month(),
        instant.year(),
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    #[test]
    fn test_medium_date_and_time() {
        let stamp = format_last_login(&at("2024-06-05T14:30:00+07:00"));
        assert_eq!(stamp, "5 thg 6, 2024, 14:30:00");
    }

    #[test]
    fn test_single_digit_day_is_not_padded() {
        let stamp = format_last_login(&at("2026-01-02T03:04:05+07:00"));
        assert_eq!(stamp, "2 thg 1, 2026, 03:04:05");
    }

    #[test]
    fn test_no_sub_second_component() {
        let stamp = format_last_login(&at("2024-06-05T14:30:00.999+07:00"));
        assert!(!stamp.contains('.'));
    }
}

//! Clock label formatting.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Pattern used to render the clock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimePattern {
    /// 24-hour time with seconds and an AM/PM marker, e.g. `21:00:00 PM`.
    #[default]
    Standard,
    /// Hour, month number, milliseconds (two digits minimum) and AM/PM marker.
    ///
    /// Reproduces the `HH:MM:SS a` label of earlier releases, where the
    /// minutes slot showed the month.
    Legacy,
}

impl TimePattern {
    /// Renders a zoned time with this pattern.
    #[must_use]
    pub fn render(self, local: &DateTime<Tz>) -> String {
        match self {
            Self::Standard => local.format("%H:%M:%S %p").to_string(),
            Self::Legacy => {
                let millis = (local.nanosecond() / 1_000_000).min(999);
                format!(
                    "{:02}:{:02}:{:02} {}",
                    local.hour(),
                    local.month(),
                    millis,
                    local.format("%p")
                )
            }
        }
    }
}

/// Formats `instant` as wall-clock time in `zone`.
#[must_use]
pub fn format_instant(instant: DateTime<Utc>, zone: Tz, pattern: TimePattern) -> String {
    pattern.render(&instant.with_timezone(&zone))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn noon_new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_standard_tokyo() {
        let text = format_instant(noon_new_year(), Tz::Asia__Tokyo, TimePattern::Standard);
        assert_eq!(text, "21:00:00 PM");
    }

    #[test]
    fn test_standard_morning_marker() {
        // New York is UTC-5 in January.
        let text = format_instant(noon_new_year(), Tz::America__New_York, TimePattern::Standard);
        assert_eq!(text, "07:00:00 AM");
    }

    #[test]
    fn test_standard_half_hour_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 12, 34, 56).unwrap();
        let text = format_instant(instant, Tz::Asia__Kolkata, TimePattern::Standard);
        assert_eq!(text, "18:04:56 PM");
    }

    #[test]
    fn test_legacy_shows_month_in_minutes_slot() {
        let text = format_instant(noon_new_year(), Tz::Asia__Tokyo, TimePattern::Legacy);
        assert_eq!(text, "21:01:00 PM");
    }

    #[test]
    fn test_legacy_milliseconds() {
        let instant = Utc
            .with_ymd_and_hms(2024, 7, 15, 3, 20, 10)
            .unwrap()
            .with_nanosecond(123_000_000)
            .unwrap();
        let text = format_instant(instant, Tz::UTC, TimePattern::Legacy);
        assert_eq!(text, "03:07:123 AM");
    }

    #[test]
    fn test_pattern_serde_names() {
        let json = serde_json::to_string(&TimePattern::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
    }
}

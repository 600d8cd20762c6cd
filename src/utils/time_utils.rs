use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::LAUNCH;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: u64 = 60;
    pub const S_IN_H: u64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: u64 = Self::S_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

    /// Short human form of a duration in seconds (e.g. `90s`, `5m`, `2h`, `30d`).
    pub fn seconds_to_string(seconds: u64) -> String {
        if seconds == 0 {
            "0s".to_string()
        } else if seconds % Self::S_IN_D == 0 {
            format!("{}d", seconds / Self::S_IN_D)
        } else if seconds % Self::S_IN_H == 0 {
            format!("{}h", seconds / Self::S_IN_H)
        } else if seconds % Self::S_IN_MIN == 0 {
            format!("{}m", seconds / Self::S_IN_MIN)
        } else {
            format!("{seconds}s")
        }
    }
}

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Resolve the scheduled launch input to epoch seconds (UTC).
/// Accepts RFC 3339, the configured date-time layouts, or raw epoch seconds.
pub fn parse_launch_date_time(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.parse::<i64>().ok();
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.timestamp());
    }

    LAUNCH
        .launch_date_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc().timestamp())
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_layouts() {
        assert_eq!(parse_launch_date_time("2030-01-01 00:00"), Some(1_893_456_000));
        assert_eq!(parse_launch_date_time("2030-01-01T00:00"), Some(1_893_456_000));
        assert_eq!(
            parse_launch_date_time("2030-01-01T01:00:00+01:00"),
            Some(1_893_456_000)
        );
        assert_eq!(parse_launch_date_time("1893456000"), Some(1_893_456_000));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_launch_date_time(""), None);
        assert_eq!(parse_launch_date_time("next tuesday"), None);
        assert_eq!(parse_launch_date_time("2030-13-40 99:99"), None);
    }

    #[test]
    fn durations_use_the_largest_whole_unit() {
        assert_eq!(TimeUtils::seconds_to_string(0), "0s");
        assert_eq!(TimeUtils::seconds_to_string(90), "90s");
        assert_eq!(TimeUtils::seconds_to_string(300), "5m");
        assert_eq!(TimeUtils::seconds_to_string(7_200), "2h");
        assert_eq!(TimeUtils::seconds_to_string(2_592_000), "30d");
        assert_eq!(epoch_sec_to_utc(1_893_456_000), "2030-01-01 00:00 UTC");
    }
}

//! Timestamp decoding for archive message headers.
//!
//! Archive exports render timestamps as free text of the form
//! `"<Weekday>, <Month> <Day>, <Year> at <Hour>"`. Only the weekday and the
//! hour are decoded; the middle date phrase is locale-specific and kept as
//! an opaque string.

use std::sync::OnceLock;

use chrono::Weekday;
use regex::Regex;

use crate::error::{Result, ThreadStatsError};

/// Decoded pieces of an archive timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTime {
    /// The middle date phrase, e.g. `"January 1, 2024"`. Not decomposed.
    pub date: String,

    /// Day of the week the message was sent.
    pub weekday: Weekday,

    /// Hour of day, 0..=23.
    pub hour: u32,
}

impl MessageTime {
    /// Zero-based weekday index, Monday = 0 .. Sunday = 6.
    pub fn weekday_index(&self) -> usize {
        self.weekday.num_days_from_monday() as usize
    }
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // "Monday, January 1, 2024 at 10" -> ("Monday", "January 1, 2024", "10")
    PATTERN.get_or_init(|| Regex::new(r"^(\w+), (.+) at (\d{1,2})\b").unwrap())
}

/// Decodes a raw archive timestamp into a [`MessageTime`].
///
/// Pure function: the same input always yields the same output.
///
/// # Errors
///
/// - [`MalformedTimestamp`](ThreadStatsError::MalformedTimestamp) when the
///   text does not match the `"<Weekday>, <date> at <Hour>"` shape.
/// - [`UnknownWeekday`](ThreadStatsError::UnknownWeekday) when the leading
///   token is not an English day name. The original export tooling silently
///   mapped these to a garbage sentinel; here it is a hard error.
/// - [`HourOutOfRange`](ThreadStatsError::HourOutOfRange) when the trailing
///   hour is 24 or more.
pub fn decode_timestamp(raw: &str) -> Result<MessageTime> {
    let caps = timestamp_pattern()
        .captures(raw)
        .ok_or_else(|| ThreadStatsError::malformed_timestamp(raw))?;

    let weekday_token = &caps[1];
    let weekday: Weekday = weekday_token
        .parse()
        .map_err(|_| ThreadStatsError::unknown_weekday(weekday_token))?;

    // Capture group 3 is 1-2 digits, so u32 parsing cannot overflow.
    let hour: u32 = caps[3]
        .parse()
        .map_err(|_| ThreadStatsError::malformed_timestamp(raw))?;
    if hour > 23 {
        return Err(ThreadStatsError::hour_out_of_range(hour));
    }

    Ok(MessageTime {
        date: caps[2].to_string(),
        weekday,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let time = decode_timestamp("Monday, January 1, 2024 at 10").unwrap();
        assert_eq!(time.weekday, Weekday::Mon);
        assert_eq!(time.weekday_index(), 0);
        assert_eq!(time.hour, 10);
        assert_eq!(time.date, "January 1, 2024");
    }

    #[test]
    fn test_decode_all_weekdays() {
        let days = [
            ("Monday", 0),
            ("Tuesday", 1),
            ("Wednesday", 2),
            ("Thursday", 3),
            ("Friday", 4),
            ("Saturday", 5),
            ("Sunday", 6),
        ];
        for (name, index) in days {
            let raw = format!("{name}, June 5, 2023 at 7");
            let time = decode_timestamp(&raw).unwrap();
            assert_eq!(time.weekday_index(), index, "weekday {name}");
        }
    }

    #[test]
    fn test_decode_trailing_text_after_hour() {
        // Some exports append the minutes and a meridiem suffix.
        let time = decode_timestamp("Sunday, December 31, 2023 at 23:59 UTC+01").unwrap();
        assert_eq!(time.weekday, Weekday::Sun);
        assert_eq!(time.hour, 23);
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode_timestamp("not a timestamp").unwrap_err();
        assert!(err.is_timestamp());
        assert!(matches!(
            err,
            ThreadStatsError::MalformedTimestamp { .. }
        ));
    }

    #[test]
    fn test_decode_unknown_weekday() {
        let err = decode_timestamp("Smonday, January 1, 2024 at 10").unwrap_err();
        assert!(matches!(err, ThreadStatsError::UnknownWeekday { .. }));
    }

    #[test]
    fn test_decode_hour_out_of_range() {
        let err = decode_timestamp("Monday, January 1, 2024 at 31").unwrap_err();
        assert!(matches!(
            err,
            ThreadStatsError::HourOutOfRange { hour: 31 }
        ));
    }

    #[test]
    fn test_decode_is_pure() {
        let raw = "Friday, May 17, 2024 at 18";
        assert_eq!(decode_timestamp(raw).unwrap(), decode_timestamp(raw).unwrap());
    }
}

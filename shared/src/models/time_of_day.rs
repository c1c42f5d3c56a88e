//! Quarter-hour wall-clock time
//!
//! Promotions only start and stop on quarter-hour boundaries, so the type
//! refuses anything that is not `HH:mm` with minutes in {00, 15, 30, 45}.
//! There is no way to hold an invalid instance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minute granularity of every [`TimeOfDay`]
pub const QUARTER_HOUR: u8 = 15;

/// Why a string was rejected as a [`TimeOfDay`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    #[error("time must be in HH:mm format, got {0:?}")]
    Malformed(String),

    #[error("hour must be between 00 and 23, got {0:?}")]
    HourOutOfRange(String),

    #[error("minutes must be 00, 15, 30 or 45, got {0:?}")]
    NotQuarterHour(String),
}

/// Validated `HH:mm` time quantized to 15 minutes
///
/// Ordering is by (hour, minute), which matches lexical ordering of the
/// canonical zero-padded string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Parse the exact `HH:mm` shape. `1:00`, `12:0`, `24:00` and `18:05`
    /// are all rejected.
    pub fn parse(text: &str) -> Result<Self, TimeOfDayError> {
        let bytes = text.as_bytes();
        let shaped = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !shaped {
            return Err(TimeOfDayError::Malformed(text.to_string()));
        }

        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');

        if hour > 23 {
            return Err(TimeOfDayError::HourOutOfRange(text.to_string()));
        }
        if minute % QUARTER_HOUR != 0 {
            return Err(TimeOfDayError::NotQuarterHour(text.to_string()));
        }

        Ok(Self { hour, minute })
    }

    /// Checked constructor from numeric parts
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || minute % QUARTER_HOUR != 0 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00 (0..=1425)
    pub fn minutes_since_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    pub fn is_before(&self, other: &TimeOfDay) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &TimeOfDay) -> bool {
        self > other
    }

    /// Every valid value in ascending order (96 of them)
    #[cfg(test)]
    fn all() -> impl Iterator<Item = TimeOfDay> {
        (0..24u8).flat_map(|hour| {
            (0..60u8)
                .step_by(QUARTER_HOUR as usize)
                .map(move |minute| TimeOfDay { hour, minute })
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_quarter_hour() {
        for hour in 0..24 {
            for minute in ["00", "15", "30", "45"] {
                let text = format!("{:02}:{}", hour, minute);
                let time = TimeOfDay::parse(&text).unwrap();
                assert_eq!(time.to_string(), text);
            }
        }
        assert_eq!(TimeOfDay::all().count(), 96);
    }

    #[test]
    fn test_rejects_off_grid_and_malformed() {
        for text in [
            "24:00", "12:05", "1:00", "12:0", "18:59", "12:60", "99:00", "", "12:00 ", " 12:00",
            "12-00", "ab:cd", "1200", "12:000", "+1:00",
        ] {
            assert!(TimeOfDay::parse(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TimeOfDay::parse("7:30"),
            Err(TimeOfDayError::Malformed("7:30".into()))
        );
        assert_eq!(
            TimeOfDay::parse("24:00"),
            Err(TimeOfDayError::HourOutOfRange("24:00".into()))
        );
        assert_eq!(
            TimeOfDay::parse("18:05"),
            Err(TimeOfDayError::NotQuarterHour("18:05".into()))
        );
    }

    #[test]
    fn test_ordering_agrees_with_lexical_order() {
        let all: Vec<TimeOfDay> = TimeOfDay::all().collect();
        for a in &all {
            for b in &all {
                let (sa, sb) = (a.to_string(), b.to_string());
                assert_eq!(a.is_before(b), sa < sb);
                assert_eq!(a.is_after(b), sa > sb);
                assert_eq!(a == b, sa == sb);
            }
        }
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(TimeOfDay::MIDNIGHT.minutes_since_midnight(), 0);
        assert_eq!(
            TimeOfDay::parse("23:45").unwrap().minutes_since_midnight(),
            1425
        );
        assert_eq!(TimeOfDay::parse("10:15").unwrap().minutes_since_midnight(), 615);
    }

    #[test]
    fn test_from_hm() {
        assert_eq!(TimeOfDay::from_hm(18, 30), TimeOfDay::parse("18:30").ok());
        assert_eq!(TimeOfDay::from_hm(18, 10), None);
        assert_eq!(TimeOfDay::from_hm(24, 0), None);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let time = TimeOfDay::parse("09:45").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"09:45\"");

        let back: TimeOfDay = serde_json::from_str("\"09:45\"").unwrap();
        assert_eq!(back, time);

        assert!(serde_json::from_str::<TimeOfDay>("\"09:40\"").is_err());
    }
}

//! Canonical day of week
//!
//! Promotions store this enum, never free text. On the wire a day is its
//! Portuguese name (`segunda-feira`, ...), the vocabulary existing clients
//! send and read back. Lowercase English names are accepted as input too.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day of week: {0:?}")]
pub struct UnknownWeekday(pub String);

/// Day of week (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "segunda-feira", alias = "monday")]
    Monday,
    #[serde(rename = "terça-feira", alias = "tuesday")]
    Tuesday,
    #[serde(rename = "quarta-feira", alias = "wednesday")]
    Wednesday,
    #[serde(rename = "quinta-feira", alias = "thursday")]
    Thursday,
    #[serde(rename = "sexta-feira", alias = "friday")]
    Friday,
    #[serde(rename = "sábado", alias = "saturday")]
    Saturday,
    #[serde(rename = "domingo", alias = "sunday")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Wire name, as printed on the menu
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "segunda-feira",
            Weekday::Tuesday => "terça-feira",
            Weekday::Wednesday => "quarta-feira",
            Weekday::Thursday => "quinta-feira",
            Weekday::Friday => "sexta-feira",
            Weekday::Saturday => "sábado",
            Weekday::Sunday => "domingo",
        }
    }

    /// Lowercase English name, accepted on input
    pub fn english_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Exact match against the Portuguese or English name, no case folding.
impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s || day.english_name() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

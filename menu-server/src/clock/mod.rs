//! Clock and time zones
//!
//! The menu is evaluated against "now" in a restaurant-local zone. All reads
//! of the wall clock go through [`DateTimeProvider`] so tests can pin it.

mod timezone;

pub use timezone::{SupportedTimezone, UnsupportedTimezone};

use chrono::{DateTime, Datelike, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use parking_lot::RwLock;
use shared::models::Weekday;

/// Source of the current instant plus zone-aware helpers
pub trait DateTimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_in(&self, tz: SupportedTimezone) -> DateTime<Tz> {
        self.now().with_timezone(&tz.tz())
    }

    /// Local day of week in `tz`
    fn current_day(&self, tz: SupportedTimezone) -> Weekday {
        self.now_in(tz).weekday().into()
    }

    /// Local wall-clock time in `tz`, truncated to the minute
    fn current_time(&self, tz: SupportedTimezone) -> NaiveTime {
        truncate_to_minute(&self.now_in(tz))
    }

    /// Day and time from a single clock read, so the two always agree
    fn current_day_and_time(&self, tz: SupportedTimezone) -> (Weekday, NaiveTime) {
        let local = self.now_in(tz);
        (local.weekday().into(), truncate_to_minute(&local))
    }

    /// `strftime`-style formatting in `tz`
    fn format_datetime(&self, tz: SupportedTimezone, fmt: &str) -> String {
        self.now_in(tz).format(fmt).to_string()
    }
}

fn truncate_to_minute(local: &DateTime<Tz>) -> NaiveTime {
    NaiveTime::from_hms_opt(local.hour(), local.minute(), 0).unwrap_or(NaiveTime::MIN)
}

/// Real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateTimeProvider for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Pinned clock for tests. Can be moved with [`FixedClock::set`].
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write() = now;
    }
}

impl DateTimeProvider for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

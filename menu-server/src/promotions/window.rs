//! Promotion activity window
//!
//! A window is a day set plus a `[start, end]` time range. Both edges are
//! inclusive. When `start > end` the range wraps past midnight
//! (22:00 - 02:00 covers 22:00..=23:59 and 00:00..=02:00).

use chrono::{NaiveTime, Timelike};
use shared::models::{Promotion, TimeOfDay, Weekday};
use std::collections::BTreeSet;

/// Day set and time range of a promotion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionWindow {
    pub days: BTreeSet<Weekday>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl PromotionWindow {
    pub fn new(days: BTreeSet<Weekday>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { days, start, end }
    }

    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self::new(
            promotion.days.clone(),
            promotion.start_time,
            promotion.end_time,
        )
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether the window covers `day` at `now`. Seconds are ignored.
    ///
    /// The day check uses the current calendar day only: in a wrapping window
    /// the after-midnight tail belongs to whatever day it falls on.
    pub fn is_active(&self, day: Weekday, now: NaiveTime) -> bool {
        if !self.days.contains(&day) {
            return false;
        }

        let now = (now.hour() * 60 + now.minute()) as u16;
        let start = self.start.minutes_since_midnight();
        let end = self.end.minutes_since_midnight();

        if start <= end {
            start <= now && now <= end
        } else {
            now >= start || now <= end
        }
    }
}

/// Is `promotion` active on `day` at `now`?
pub fn is_promotion_active(promotion: &Promotion, day: Weekday, now: NaiveTime) -> bool {
    let window = PromotionWindow::from_promotion(promotion);
    let active = window.is_active(day, now);
    tracing::trace!(
        promotion_id = promotion.id,
        day = %day,
        now = %now.format("%H:%M"),
        active,
        "Promotion window evaluated"
    );
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(text: &str) -> TimeOfDay {
        TimeOfDay::parse(text).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn window(days: &[Weekday], start: &str, end: &str) -> PromotionWindow {
        PromotionWindow::new(days.iter().copied().collect(), t(start), t(end))
    }

    #[test]
    fn test_same_day_window_is_inclusive() {
        let w = window(&[Weekday::Monday], "10:00", "14:00");

        assert!(w.is_active(Weekday::Monday, at(10, 0)));
        assert!(w.is_active(Weekday::Monday, at(12, 0)));
        assert!(w.is_active(Weekday::Monday, at(14, 0)));
        assert!(!w.is_active(Weekday::Monday, at(9, 59)));
        assert!(!w.is_active(Weekday::Monday, at(14, 1)));
    }

    #[test]
    fn test_wrong_day_is_inactive() {
        let w = window(&[Weekday::Monday], "10:00", "14:00");
        assert!(!w.is_active(Weekday::Tuesday, at(12, 0)));
    }

    #[test]
    fn test_window_wrapping_midnight() {
        let days = Weekday::ALL;
        let w = window(&days, "23:00", "02:00");
        assert!(w.wraps_midnight());

        assert!(w.is_active(Weekday::Friday, at(23, 30)));
        assert!(w.is_active(Weekday::Friday, at(0, 0)));
        assert!(w.is_active(Weekday::Friday, at(1, 30)));
        assert!(w.is_active(Weekday::Friday, at(2, 0)));
        assert!(!w.is_active(Weekday::Friday, at(2, 1)));
        assert!(!w.is_active(Weekday::Friday, at(22, 59)));
        assert!(!w.is_active(Weekday::Friday, at(12, 0)));
    }

    #[test]
    fn test_wrapping_tail_uses_current_day() {
        // Friday night only: the Saturday 01:00 tail is not covered
        let w = window(&[Weekday::Friday], "22:00", "02:00");
        assert!(w.is_active(Weekday::Friday, at(23, 0)));
        assert!(!w.is_active(Weekday::Saturday, at(1, 0)));
        assert!(w.is_active(Weekday::Friday, at(1, 0)));
    }

    #[test]
    fn test_seconds_are_truncated() {
        let w = window(&[Weekday::Monday], "10:00", "14:00");
        let almost_past = NaiveTime::from_hms_opt(14, 0, 59).unwrap();
        assert!(w.is_active(Weekday::Monday, almost_past));
    }

    #[test]
    fn test_single_instant_window() {
        let w = window(&[Weekday::Sunday], "12:00", "12:00");
        assert!(!w.wraps_midnight());
        assert!(w.is_active(Weekday::Sunday, at(12, 0)));
        assert!(!w.is_active(Weekday::Sunday, at(12, 1)));
    }

    #[test]
    fn test_is_promotion_active() {
        let promotion = Promotion {
            id: 1,
            product_id: 2,
            description: "Almoço executivo".to_string(),
            promotional_price: rust_decimal::Decimal::from(20),
            days: [Weekday::Monday, Weekday::Wednesday].into_iter().collect(),
            start_time: t("11:30"),
            end_time: t("14:30"),
            created_at: 0,
            updated_at: 0,
        };

        assert!(is_promotion_active(&promotion, Weekday::Wednesday, at(13, 15)));
        assert!(!is_promotion_active(&promotion, Weekday::Tuesday, at(13, 15)));
        assert!(!is_promotion_active(&promotion, Weekday::Monday, at(14, 45)));
    }
}

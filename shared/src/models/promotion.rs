//! Promotion Model

use super::time_of_day::TimeOfDay;
use super::weekday::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Promotional price for one product on a weekly schedule
///
/// `start_time > end_time` means the window crosses midnight
/// (e.g. 23:00 - 02:00). Stored records always satisfy `end_time > start_time`
/// when created through the validator; wraparound records can still come
/// from imports, and activity evaluation handles them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    /// Referenced product (not owned)
    pub product_id: i64,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub promotional_price: Decimal,
    /// Active days, never empty
    pub days: BTreeSet<Weekday>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Created timestamp (milliseconds since epoch)
    pub created_at: i64,
    /// Updated timestamp (milliseconds since epoch)
    pub updated_at: i64,
}

/// Create promotion payload
///
/// Times stay as text here; the validator owns parsing so that format errors
/// carry their own error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCreate {
    pub product_id: i64,
    pub description: String,
    pub promotional_price: Decimal,
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

/// Update promotion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotional_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Weekday>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Validated promotion ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub product_id: i64,
    pub description: String,
    pub promotional_price: Decimal,
    pub days: BTreeSet<Weekday>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Validated field changes, produced by the promotion validator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionChanges {
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub promotional_price: Option<Decimal>,
    pub days: Option<BTreeSet<Weekday>>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

impl Promotion {
    pub fn new(id: i64, data: NewPromotion, now: i64) -> Self {
        Self {
            id,
            product_id: data.product_id,
            description: data.description,
            promotional_price: data.promotional_price,
            days: data.days,
            start_time: data.start_time,
            end_time: data.end_time,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply validated changes and stamp `updated_at`
    pub fn apply(&mut self, changes: PromotionChanges, now: i64) {
        if let Some(product_id) = changes.product_id {
            self.product_id = product_id;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(price) = changes.promotional_price {
            self.promotional_price = price;
        }
        if let Some(days) = changes.days {
            self.days = days;
        }
        if let Some(start) = changes.start_time {
            self.start_time = start;
        }
        if let Some(end) = changes.end_time {
            self.end_time = end;
        }
        self.updated_at = now;
    }

    /// True when the stored window wraps past midnight
    pub fn crosses_midnight(&self) -> bool {
        self.start_time > self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn promotion() -> Promotion {
        Promotion {
            id: 1,
            product_id: 10,
            description: "Happy hour".to_string(),
            promotional_price: Decimal::from_str("9.90").unwrap(),
            days: [Weekday::Friday].into_iter().collect(),
            start_time: TimeOfDay::parse("18:00").unwrap(),
            end_time: TimeOfDay::parse("20:00").unwrap(),
            created_at: 100,
            updated_at: 100,
        }
    }

    #[test]
    fn test_apply_changes_and_touch() {
        let mut promo = promotion();
        promo.apply(
            PromotionChanges {
                end_time: Some(TimeOfDay::parse("21:30").unwrap()),
                ..Default::default()
            },
            200,
        );
        assert_eq!(promo.end_time.to_string(), "21:30");
        assert_eq!(promo.start_time.to_string(), "18:00");
        assert_eq!(promo.updated_at, 200);
        assert_eq!(promo.created_at, 100);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(promotion()).unwrap();
        assert_eq!(json["start_time"], "18:00");
        assert_eq!(json["days"], serde_json::json!(["sexta-feira"]));
        assert_eq!(json["promotional_price"], serde_json::json!(9.9));
    }

    #[test]
    fn test_crosses_midnight() {
        let mut promo = promotion();
        assert!(!promo.crosses_midnight());
        promo.start_time = TimeOfDay::parse("23:00").unwrap();
        promo.end_time = TimeOfDay::parse("02:00").unwrap();
        assert!(promo.crosses_midnight());
    }
}

//! Menu view models
//!
//! Derived on every request from products and promotions, never stored.

use super::category::ProductCategory;
use super::weekday::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Promotion attached to a menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionSummary {
    pub description: String,
    /// Whether the promotion applies right now
    pub active: bool,
}

/// One product line on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Only present while the promotion is active
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub promotional_price: Option<Decimal>,
    pub category: ProductCategory,
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionSummary>,
}

impl MenuEntry {
    /// Price the customer pays right now
    pub fn effective_price(&self) -> Decimal {
        self.promotional_price.unwrap_or(self.price)
    }
}

/// All entries of one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: ProductCategory,
    pub products: Vec<MenuEntry>,
}

/// Clock context the menu was evaluated against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuMetadata {
    pub timezone: String,
    pub current_day: Weekday,
    /// `HH:mm`
    pub current_time: String,
}

/// `GET /menu` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuView {
    pub menu: Vec<MenuSection>,
    pub metadata: MenuMetadata,
}

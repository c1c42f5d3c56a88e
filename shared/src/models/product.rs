//! Product Model

use super::category::ProductCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    /// Unique across all products
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: ProductCategory,
    pub visible: bool,
    /// Position inside its category on the menu
    pub order: i32,
    /// Created timestamp (milliseconds since epoch)
    pub created_at: i64,
    /// Updated timestamp (milliseconds since epoch)
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub category: ProductCategory,
    #[serde(default = "default_true")]
    pub visible: bool,
    pub order: Option<i32>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(id: i64, data: ProductCreate, now: i64) -> Self {
        Self {
            id,
            name: data.name,
            price: data.price,
            category: data.category,
            visible: data.visible,
            order: data.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields and stamp `updated_at`.
    ///
    /// The stamp happens even when `changes` is empty, an explicit update
    /// call always counts as a touch.
    pub fn apply(&mut self, changes: ProductUpdate, now: i64) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(visible) = changes.visible {
            self.visible = visible;
        }
        if let Some(order) = changes.order {
            self.order = order;
        }
        self.updated_at = now;
    }
}

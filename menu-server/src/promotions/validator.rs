//! Promotion write validation
//!
//! Pure checks run before a promotion is created or updated. The caller does
//! the store lookups (existing promotion, referenced product) and hands the
//! results in; nothing here touches a store or the clock.
//!
//! Check order:
//! 1. request fields (description, price, days)
//! 2. start time format, then end time format
//! 3. time ordering, against the stored edge when only one edge changes
//! 4. referenced product exists
//! 5. promotional price strictly below the product price

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    NewPromotion, Product, Promotion, PromotionChanges, PromotionCreate, PromotionUpdate,
    TimeOfDay, TimeOfDayError, Weekday,
};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::utils::validation::MAX_DESCRIPTION_LEN;

/// Promotion validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromotionError {
    #[error("invalid {field}: {source}")]
    InvalidTimeFormat {
        field: &'static str,
        #[source]
        source: TimeOfDayError,
    },

    #[error("end time {end} must be after start time {start}")]
    InvalidTimeRange { start: TimeOfDay, end: TimeOfDay },

    #[error("product {0} not found")]
    ProductNotFound(i64),

    #[error("promotion {0} not found")]
    PromotionNotFound(i64),

    #[error("promotional price {promotional} must be lower than product price {product}")]
    InvalidPromotionalPrice { promotional: Decimal, product: Decimal },

    #[error("promotion must be active on at least one day")]
    DaysEmpty,

    #[error("{field} {message}")]
    Validation { field: &'static str, message: String },
}

impl From<PromotionError> for AppError {
    fn from(err: PromotionError) -> Self {
        let message = err.to_string();
        match err {
            PromotionError::InvalidTimeFormat { field, .. } => {
                AppError::with_message(ErrorCode::InvalidTimeFormat, message)
                    .with_detail("field", field)
            }
            PromotionError::InvalidTimeRange { start, end } => {
                AppError::with_message(ErrorCode::InvalidTimeRange, message)
                    .with_detail("start_time", start.to_string())
                    .with_detail("end_time", end.to_string())
            }
            PromotionError::ProductNotFound(id) => AppError::product_not_found(id),
            PromotionError::PromotionNotFound(id) => AppError::promotion_not_found(id),
            PromotionError::InvalidPromotionalPrice {
                promotional,
                product,
            } => AppError::with_message(ErrorCode::InvalidPromotionalPrice, message)
                .with_detail("promotional_price", promotional.to_string())
                .with_detail("product_price", product.to_string()),
            PromotionError::DaysEmpty => {
                AppError::with_message(ErrorCode::PromotionDaysEmpty, message)
                    .with_detail("field", "days")
            }
            PromotionError::Validation { field, .. } => {
                AppError::validation(message).with_detail("field", field)
            }
        }
    }
}

/// Unvalidated promotion fields, shared by create and update requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionDraft {
    pub product_id: Option<i64>,
    pub description: Option<String>,
    pub promotional_price: Option<Decimal>,
    pub days: Option<Vec<Weekday>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl From<PromotionCreate> for PromotionDraft {
    fn from(data: PromotionCreate) -> Self {
        Self {
            product_id: Some(data.product_id),
            description: Some(data.description),
            promotional_price: Some(data.promotional_price),
            days: Some(data.days),
            start_time: Some(data.start_time),
            end_time: Some(data.end_time),
        }
    }
}

impl From<PromotionUpdate> for PromotionDraft {
    fn from(data: PromotionUpdate) -> Self {
        Self {
            product_id: data.product_id,
            description: data.description,
            promotional_price: data.promotional_price,
            days: data.days,
            start_time: data.start_time,
            end_time: data.end_time,
        }
    }
}

impl PromotionDraft {
    /// Product the caller must look up before validating.
    ///
    /// A create always needs it. An update needs it when it moves the
    /// promotion to another product or changes the price.
    pub fn product_to_check(&self, existing: Option<&Promotion>) -> Option<i64> {
        match existing {
            None => self.product_id,
            Some(current) => self.product_id.or_else(|| {
                self.promotional_price
                    .is_some()
                    .then_some(current.product_id)
            }),
        }
    }
}

/// Validate a create request.
///
/// `product` is the lookup result for [`PromotionDraft::product_to_check`].
pub fn validate_create(
    draft: &PromotionDraft,
    product: Option<&Product>,
) -> Result<NewPromotion, PromotionError> {
    let product_id = draft.product_id.ok_or_else(|| required("product_id"))?;
    let description = draft
        .description
        .as_deref()
        .ok_or_else(|| required("description"))?;
    let promotional_price = draft
        .promotional_price
        .ok_or_else(|| required("promotional_price"))?;
    let days = draft.days.as_deref().ok_or_else(|| required("days"))?;
    let start_text = draft
        .start_time
        .as_deref()
        .ok_or_else(|| required("start_time"))?;
    let end_text = draft
        .end_time
        .as_deref()
        .ok_or_else(|| required("end_time"))?;

    check_description(description)?;
    check_price(promotional_price)?;
    let days = check_days(days)?;

    let start_time = parse_time("start_time", start_text)?;
    let end_time = parse_time("end_time", end_text)?;
    check_order(start_time, end_time)?;

    let product = product.ok_or(PromotionError::ProductNotFound(product_id))?;
    check_below_product_price(promotional_price, product)?;

    Ok(NewPromotion {
        product_id,
        description: description.to_string(),
        promotional_price,
        days,
        start_time,
        end_time,
    })
}

/// Validate an update request against the stored record.
///
/// `product` is the lookup result for [`PromotionDraft::product_to_check`];
/// it is ignored when that returns `None`.
pub fn validate_update(
    draft: &PromotionDraft,
    existing: &Promotion,
    product: Option<&Product>,
) -> Result<PromotionChanges, PromotionError> {
    if let Some(description) = draft.description.as_deref() {
        check_description(description)?;
    }
    if let Some(price) = draft.promotional_price {
        check_price(price)?;
    }
    let days = draft.days.as_deref().map(check_days).transpose()?;

    let start_time = draft
        .start_time
        .as_deref()
        .map(|text| parse_time("start_time", text))
        .transpose()?;
    let end_time = draft
        .end_time
        .as_deref()
        .map(|text| parse_time("end_time", text))
        .transpose()?;

    match (start_time, end_time) {
        (Some(start), Some(end)) => check_order(start, end)?,
        (Some(start), None) => check_order(start, existing.end_time)?,
        (None, Some(end)) => check_order(existing.start_time, end)?,
        (None, None) => {}
    }

    if let Some(product_id) = draft.product_to_check(Some(existing)) {
        let product = product.ok_or(PromotionError::ProductNotFound(product_id))?;
        let price = draft
            .promotional_price
            .unwrap_or(existing.promotional_price);
        check_below_product_price(price, product)?;
    }

    Ok(PromotionChanges {
        product_id: draft.product_id,
        description: draft.description.clone(),
        promotional_price: draft.promotional_price,
        days,
        start_time,
        end_time,
    })
}

fn required(field: &'static str) -> PromotionError {
    PromotionError::Validation {
        field,
        message: "is required".to_string(),
    }
}

fn check_description(description: &str) -> Result<(), PromotionError> {
    if description.trim().is_empty() {
        return Err(PromotionError::Validation {
            field: "description",
            message: "must not be empty".to_string(),
        });
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(PromotionError::Validation {
            field: "description",
            message: format!("is too long ({len} chars, max {MAX_DESCRIPTION_LEN})"),
        });
    }
    Ok(())
}

fn check_price(price: Decimal) -> Result<(), PromotionError> {
    if price <= Decimal::ZERO {
        return Err(PromotionError::Validation {
            field: "promotional_price",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn check_days(days: &[Weekday]) -> Result<BTreeSet<Weekday>, PromotionError> {
    if days.is_empty() {
        return Err(PromotionError::DaysEmpty);
    }
    Ok(days.iter().copied().collect())
}

fn parse_time(field: &'static str, text: &str) -> Result<TimeOfDay, PromotionError> {
    TimeOfDay::parse(text).map_err(|source| PromotionError::InvalidTimeFormat { field, source })
}

fn check_order(start: TimeOfDay, end: TimeOfDay) -> Result<(), PromotionError> {
    if !end.is_after(&start) {
        return Err(PromotionError::InvalidTimeRange { start, end });
    }
    Ok(())
}

fn check_below_product_price(price: Decimal, product: &Product) -> Result<(), PromotionError> {
    if price >= product.price {
        return Err(PromotionError::InvalidPromotionalPrice {
            promotional: price,
            product: product.price,
        });
    }
    Ok(())
}

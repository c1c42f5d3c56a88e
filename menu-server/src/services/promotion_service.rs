//! Promotion Service - promotion use cases
//!
//! Loads what the validator needs (stored promotion, referenced product),
//! validates, then writes.
//!
//! Product deletes are not serialized with promotion writes. A write that
//! races a delete of its product is detected after the fact and removed, so
//! no promotion outlives its product.

use shared::error::AppError;
use shared::models::{Product, Promotion, PromotionCreate, PromotionUpdate};
use std::sync::Arc;

use crate::db::repository::{ProductStore, PromotionStore, RepoError};
use crate::promotions::{PromotionDraft, PromotionError, validate_create, validate_update};
use crate::utils::AppResult;

#[derive(Clone)]
pub struct PromotionService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
}

impl PromotionService {
    pub fn new(products: Arc<dyn ProductStore>, promotions: Arc<dyn PromotionStore>) -> Self {
        Self {
            products,
            promotions,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Promotion>> {
        Ok(self.promotions.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> AppResult<Promotion> {
        self.promotions
            .find_by_id(id)
            .await?
            .ok_or_else(|| PromotionError::PromotionNotFound(id).into())
    }

    /// Promotions of one product. Unknown product is a 404.
    pub async fn list_for_product(&self, product_id: i64) -> AppResult<Vec<Promotion>> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(PromotionError::ProductNotFound(product_id).into());
        }
        Ok(self.promotions.find_by_product_id(product_id).await?)
    }

    pub async fn create(&self, data: PromotionCreate) -> AppResult<Promotion> {
        let draft = PromotionDraft::from(data);
        let product = self.lookup_product(draft.product_to_check(None)).await?;
        let new = validate_create(&draft, product.as_ref())?;

        let promotion = self.promotions.create(new).await?;
        self.drop_if_orphaned(&promotion).await?;
        tracing::info!(
            id = promotion.id,
            product_id = promotion.product_id,
            start = %promotion.start_time,
            end = %promotion.end_time,
            "Promotion created"
        );
        Ok(promotion)
    }

    pub async fn update(&self, id: i64, data: PromotionUpdate) -> AppResult<Promotion> {
        let existing = self
            .promotions
            .find_by_id(id)
            .await?
            .ok_or(PromotionError::PromotionNotFound(id))?;

        let draft = PromotionDraft::from(data);
        let product = self
            .lookup_product(draft.product_to_check(Some(&existing)))
            .await?;
        let changes = validate_update(&draft, &existing, product.as_ref())?;

        let promotion = self
            .promotions
            .update(id, changes)
            .await
            .map_err(|e| -> AppError {
                match e {
                    RepoError::NotFound(_) => PromotionError::PromotionNotFound(id).into(),
                    other => other.into(),
                }
            })?;
        self.drop_if_orphaned(&promotion).await?;

        tracing::info!(id = promotion.id, "Promotion updated");
        Ok(promotion)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.promotions.delete(id).await? {
            return Err(PromotionError::PromotionNotFound(id).into());
        }
        tracing::info!(id, "Promotion deleted");
        Ok(())
    }

    /// Undo a write whose product was deleted concurrently
    async fn drop_if_orphaned(&self, promotion: &Promotion) -> AppResult<()> {
        if self.products.find_by_id(promotion.product_id).await?.is_some() {
            return Ok(());
        }
        self.promotions.delete(promotion.id).await?;
        tracing::warn!(
            id = promotion.id,
            product_id = promotion.product_id,
            "Product deleted during promotion write, promotion removed"
        );
        Err(PromotionError::ProductNotFound(promotion.product_id).into())
    }

    async fn lookup_product(&self, id: Option<i64>) -> AppResult<Option<Product>> {
        match id {
            Some(id) => Ok(self.products.find_by_id(id).await?),
            None => Ok(None),
        }
    }
}

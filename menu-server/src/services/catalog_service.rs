//! Catalog Service - product use cases
//!
//! Field rules, name uniqueness and the promotion cascade on delete.
//! Storage is behind [`ProductStore`] / [`PromotionStore`].

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};
use std::sync::Arc;
use thiserror::Error;

use crate::db::repository::{ProductStore, PromotionStore, RepoError};
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, is_positive, validate_optional_text, validate_required_text,
};

/// Product rule violations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(i64),

    #[error("product name '{0}' is already in use")]
    NameExists(String),

    #[error("price must be greater than zero, got {0}")]
    InvalidPrice(Decimal),

    #[error("order must not be negative, got {0}")]
    InvalidOrder(i32),

    #[error(transparent)]
    Repo(RepoError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::NotFound(id) => AppError::product_not_found(id),
            CatalogError::NameExists(name) => {
                AppError::with_message(ErrorCode::ProductNameExists, message)
                    .with_detail("name", name)
            }
            CatalogError::InvalidPrice(_) => {
                AppError::with_message(ErrorCode::ProductInvalidPrice, message)
                    .with_detail("field", "price")
            }
            CatalogError::InvalidOrder(_) => {
                AppError::validation(message).with_detail("field", "order")
            }
            CatalogError::Repo(e) => e.into(),
        }
    }
}

/// Store errors seen by a write touching `name`
fn write_error(err: RepoError, id: Option<i64>, name: Option<String>) -> CatalogError {
    match (err, id, name) {
        (RepoError::Duplicate(_), _, Some(name)) => CatalogError::NameExists(name),
        (RepoError::NotFound(_), Some(id), _) => CatalogError::NotFound(id),
        (other, _, _) => CatalogError::Repo(other),
    }
}

#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
    promotions: Arc<dyn PromotionStore>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductStore>, promotions: Arc<dyn PromotionStore>) -> Self {
        Self {
            products,
            promotions,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id).into())
    }

    pub async fn create(&self, data: ProductCreate) -> AppResult<Product> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        check_price(data.price)?;
        if let Some(order) = data.order {
            check_order(order)?;
        }

        let name = data.name.clone();
        let product = self
            .products
            .create(data)
            .await
            .map_err(|e| write_error(e, None, Some(name)))?;

        tracing::info!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub async fn update(&self, id: i64, data: ProductUpdate) -> AppResult<Product> {
        validate_optional_text(&data.name, "name", MAX_NAME_LEN)?;
        if let Some(price) = data.price {
            check_price(price)?;
        }
        if let Some(order) = data.order {
            check_order(order)?;
        }

        let name = data.name.clone();
        let product = self
            .products
            .update(id, data)
            .await
            .map_err(|e| write_error(e, Some(id), name))?;

        tracing::info!(id = product.id, "Product updated");
        Ok(product)
    }

    /// Delete a product and every promotion referencing it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.products.delete(id).await? {
            return Err(CatalogError::NotFound(id).into());
        }
        let removed = self.promotions.delete_by_product_id(id).await?;

        tracing::info!(id, promotions_removed = removed, "Product deleted");
        Ok(())
    }
}

fn check_price(price: Decimal) -> Result<(), CatalogError> {
    if !is_positive(price) {
        return Err(CatalogError::InvalidPrice(price));
    }
    Ok(())
}

fn check_order(order: i32) -> Result<(), CatalogError> {
    if order < 0 {
        return Err(CatalogError::InvalidOrder(order));
    }
    Ok(())
}

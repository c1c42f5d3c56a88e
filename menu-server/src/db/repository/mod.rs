//! Repository Module
//!
//! Store traits for products and promotions plus their in-memory
//! implementations. Handlers and services only see the traits.

pub mod product;
pub mod promotion;

// Re-exports
pub use product::InMemoryProductStore;
pub use promotion::InMemoryPromotionStore;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    NewPromotion, Product, ProductCreate, ProductUpdate, Promotion, PromotionChanges,
};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Product persistence
///
/// Lookups report absence as `Ok(None)`. Names are unique: `create` and a
/// renaming `update` fail with [`RepoError::Duplicate`].
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, data: ProductCreate) -> RepoResult<Product>;

    /// All products, oldest first
    async fn find_all(&self) -> RepoResult<Vec<Product>>;

    /// Visible products ordered by `order`, then name
    async fn find_visible(&self) -> RepoResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>>;

    /// Fails with [`RepoError::NotFound`] for unknown ids
    async fn update(&self, id: i64, data: ProductUpdate) -> RepoResult<Product>;

    /// Returns whether a product was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

/// Promotion persistence. Records arrive already validated.
#[async_trait]
pub trait PromotionStore: Send + Sync {
    async fn create(&self, data: NewPromotion) -> RepoResult<Promotion>;

    /// All promotions, oldest first
    async fn find_all(&self) -> RepoResult<Vec<Promotion>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Promotion>>;

    /// Promotions referencing `product_id`, oldest first
    async fn find_by_product_id(&self, product_id: i64) -> RepoResult<Vec<Promotion>>;

    /// Fails with [`RepoError::NotFound`] for unknown ids
    async fn update(&self, id: i64, changes: PromotionChanges) -> RepoResult<Promotion>;

    /// Returns whether a promotion was removed
    async fn delete(&self, id: i64) -> RepoResult<bool>;

    /// Removes every promotion of `product_id`, returns how many
    async fn delete_by_product_id(&self, product_id: i64) -> RepoResult<usize>;
}

/// Mint an id not present in `taken`
pub(crate) fn fresh_id(taken: impl Fn(i64) -> bool) -> i64 {
    loop {
        let id = shared::util::snowflake_id();
        if !taken(id) {
            return id;
        }
    }
}

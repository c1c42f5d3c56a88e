//! Database Module
//!
//! Store traits and the in-memory stores backing them.

pub mod repository;

pub use repository::{
    InMemoryProductStore, InMemoryPromotionStore, ProductStore, PromotionStore, RepoError,
    RepoResult,
};

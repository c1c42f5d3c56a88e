//! Service layer - use cases and HTTP serving
//!
//! # Services
//!
//! - [`CatalogService`] - products (unique names, delete cascades to promotions)
//! - [`PromotionService`] - promotions (validated before every write)
//! - [`MenuService`] - the current menu
//! - [`http`] - router construction and the HTTP server

pub mod catalog_service;
pub mod http;
pub mod menu_service;
pub mod promotion_service;

pub use catalog_service::{CatalogError, CatalogService};
pub use http::{build_app, build_router, serve};
pub use menu_service::MenuService;
pub use promotion_service::PromotionService;

//! Promotions - activity windows and write validation
//!
//! - [`window`] - is a promotion active on a given day and time (wraps midnight)
//! - [`validator`] - pure checks run before a promotion is created or updated

pub mod validator;
pub mod window;

pub use validator::{PromotionDraft, PromotionError, validate_create, validate_update};
pub use window::{PromotionWindow, is_promotion_active};

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口
//! - [`promotions`] - 促销管理接口
//! - [`menu`] - 当前菜单接口
//! - [`extract`] - 统一错误的 JSON 提取器

pub mod extract;
pub mod health;
pub mod menu;
pub mod products;
pub mod promotions;

use serde::Serialize;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// `{"message": "..."}` body returned by deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

//! Menu API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /menu?timezone=America/Manaus | GET | 当前菜单 (含生效中的促销价) |

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::models::MenuView;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/menu", get(current_menu))
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// IANA zone name, unsupported values fall back to the default zone
    pub timezone: Option<String>,
}

/// GET /menu - 获取当前菜单
pub async fn current_menu(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<MenuView>> {
    let view = state.menu.current_menu(query.timezone.as_deref()).await?;
    Ok(Json(view))
}

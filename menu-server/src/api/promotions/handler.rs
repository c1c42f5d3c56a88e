//! Promotion API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{Promotion, PromotionCreate, PromotionUpdate};

use crate::api::MessageResponse;
use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub promotion: Promotion,
}

#[derive(Debug, Serialize)]
pub struct PromotionListResponse {
    pub promotions: Vec<Promotion>,
}

/// GET /promotions - 获取所有促销
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<PromotionListResponse>> {
    let promotions = state.promotions.list().await?;
    Ok(Json(PromotionListResponse { promotions }))
}

/// GET /promotions/:id - 获取单个促销
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PromotionResponse>> {
    let promotion = state.promotions.get(id).await?;
    Ok(Json(PromotionResponse { promotion }))
}

/// POST /promotions - 创建促销
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PromotionCreate>,
) -> AppResult<(StatusCode, Json<PromotionResponse>)> {
    let promotion = state.promotions.create(payload).await?;
    Ok((StatusCode::CREATED, Json(PromotionResponse { promotion })))
}

/// PUT /promotions/:id - 更新促销
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<PromotionUpdate>,
) -> AppResult<Json<PromotionResponse>> {
    let promotion = state.promotions.update(id, payload).await?;
    Ok(Json(PromotionResponse { promotion }))
}

/// DELETE /promotions/:id - 删除促销
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.promotions.delete(id).await?;
    Ok(Json(MessageResponse::new("Promotion deleted successfully")))
}

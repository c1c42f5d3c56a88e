//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use shared::models::{Product, ProductCreate, ProductUpdate, Promotion};

use crate::api::MessageResponse;
use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductPromotionsResponse {
    pub promotions: Vec<Promotion>,
}

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ProductListResponse>> {
    let products = state.catalog.list().await?;
    Ok(Json(ProductListResponse { products }))
}

/// GET /products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.catalog.get(id).await?;
    Ok(Json(ProductResponse { product }))
}

/// POST /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.catalog.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse { product })))
}

/// PUT /products/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<ProductUpdate>,
) -> AppResult<Json<ProductResponse>> {
    let product = state.catalog.update(id, payload).await?;
    Ok(Json(ProductResponse { product }))
}

/// DELETE /products/:id - 删除商品 (级联删除其促销)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.catalog.delete(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

/// GET /products/:id/promotions - 获取商品的所有促销
pub async fn list_promotions(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductPromotionsResponse>> {
    let promotions = state.promotions.list_for_product(id).await?;
    Ok(Json(ProductPromotionsResponse { promotions }))
}

//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{BookingRequest, CateringOrder, OrderQuery, OrderStatusUpdate};

use crate::core::ServerState;
use crate::db::repository::{caterer, order};
use crate::services::booking;
use crate::utils::{AppError, AppResult};

/// POST /api/orders
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<Json<CateringOrder>> {
    let order = booking::book(&state.pool, payload, state.config.default_quantity_mode).await?;
    Ok(Json(order))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CateringOrder>> {
    let order = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::order_not_found(id))?;
    Ok(Json(order))
}

/// GET /api/caterers/{id}/orders
pub async fn list_by_caterer(
    State(state): State<ServerState>,
    Path(caterer_id): Path<i64>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<CateringOrder>>> {
    if caterer::find_by_id(&state.pool, caterer_id).await?.is_none() {
        return Err(AppError::caterer_not_found(caterer_id));
    }
    let orders = order::find_by_caterer(&state.pool, caterer_id, &query).await?;
    Ok(Json(orders))
}

/// PUT /api/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<CateringOrder>> {
    let order = booking::transition(&state.pool, id, payload.status).await?;
    Ok(Json(order))
}

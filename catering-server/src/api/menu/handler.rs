//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery};

use crate::core::ServerState;
use crate::db::repository::{RepoError, caterer, menu_item};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// GET /api/caterers/{id}/menu - `?availableOnly=true&category=...`
pub async fn list(
    State(state): State<ServerState>,
    Path(caterer_id): Path<i64>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    if caterer::find_by_id(&state.pool, caterer_id).await?.is_none() {
        return Err(AppError::caterer_not_found(caterer_id));
    }
    let items = menu_item::find_by_caterer(&state.pool, caterer_id, &query).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::menu_item_not_found(id))?;
    Ok(Json(item))
}

/// POST /api/caterers/{id}/menu
pub async fn create(
    State(state): State<ServerState>,
    Path(caterer_id): Path<i64>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_price(payload.unit_price, "unitPrice")?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.item_type, "type", MAX_SHORT_TEXT_LEN)?;
    if caterer::find_by_id(&state.pool, caterer_id).await?.is_none() {
        return Err(AppError::caterer_not_found(caterer_id));
    }

    let item = menu_item::create(&state.pool, caterer_id, payload)
        .await
        .map_err(name_conflict)?;
    tracing::info!(item_id = item.id, caterer_id, name = %item.name, "Menu item created");
    Ok(Json(item))
}

/// PUT /api/menu-items/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.unit_price {
        validate_price(price, "unitPrice")?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.item_type, "type", MAX_SHORT_TEXT_LEN)?;

    let item = menu_item::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::menu_item_not_found(id),
            other => name_conflict(other),
        })?;
    Ok(Json(item))
}

/// DELETE /api/menu-items/{id}
///
/// Placed orders keep their line snapshots.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !menu_item::delete(&state.pool, id).await? {
        return Err(AppError::menu_item_not_found(id));
    }
    tracing::info!(item_id = id, "Menu item deleted");
    Ok(Json(true))
}

fn name_conflict(err: RepoError) -> AppError {
    match err {
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::MenuItemNameExists, msg),
        other => other.into(),
    }
}

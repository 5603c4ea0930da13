//! Caterer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{Caterer, CatererCreate, CatererUpdate, DiscountPreviewQuery, PricingSettings};
use shared::pricing::{DiscountPreview, preview_discount};

use crate::core::ServerState;
use crate::db::repository::caterer;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_discount_rules, validate_email, validate_misc_cost,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/caterers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Caterer>>> {
    let caterers = caterer::find_all(&state.pool).await?;
    Ok(Json(caterers))
}

/// GET /api/caterers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Caterer>> {
    let caterer = caterer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::caterer_not_found(id))?;
    Ok(Json(caterer))
}

/// POST /api/caterers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CatererCreate>,
) -> AppResult<Json<Caterer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    if let Some(email) = &payload.contact_email {
        validate_email(email, "contactEmail")?;
    }
    if let Some(misc_cost) = payload.misc_cost {
        validate_misc_cost(misc_cost)?;
    }
    let rules = validate_discount_rules(payload.discount_rules.as_deref().unwrap_or_default())?;

    let caterer = caterer::create(&state.pool, payload, &rules).await?;
    tracing::info!(caterer_id = caterer.id, name = %caterer.name, "Caterer created");
    Ok(Json(caterer))
}

/// PUT /api/caterers/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CatererUpdate>,
) -> AppResult<Json<Caterer>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(email) = &payload.contact_email {
        validate_email(email, "contactEmail")?;
    }
    if caterer::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::caterer_not_found(id));
    }

    let caterer = caterer::update(&state.pool, id, payload).await?;
    Ok(Json(caterer))
}

/// PUT /api/caterers/{id}/pricing
///
/// The submitted table replaces the stored one entirely; an empty list
/// removes all tiers.
pub async fn update_pricing(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PricingSettings>,
) -> AppResult<Json<Caterer>> {
    if let Some(misc_cost) = payload.misc_cost {
        validate_misc_cost(misc_cost)?;
    }
    let rules = validate_discount_rules(&payload.discount_rules)?;
    if caterer::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::caterer_not_found(id));
    }

    let caterer = caterer::replace_pricing(&state.pool, id, payload.misc_cost, &rules).await?;
    Ok(Json(caterer))
}

/// GET /api/caterers/{id}/discount-preview?guestCount=N
pub async fn discount_preview(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<DiscountPreviewQuery>,
) -> AppResult<Json<DiscountPreview>> {
    let caterer = caterer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::caterer_not_found(id))?;
    Ok(Json(preview_discount(&caterer.discount_rules, query.guest_count)))
}

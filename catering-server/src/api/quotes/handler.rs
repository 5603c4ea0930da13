//! Quote preview handler

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{QuoteRequest, QuoteResponse};

use crate::core::ServerState;
use crate::services::{QuoteSelection, resolve_quote};
use crate::utils::AppResult;

/// POST /api/caterers/{id}/quote
///
/// Prices the selection against the caterer's current menu and settings.
/// Nothing is stored.
pub async fn preview(
    State(state): State<ServerState>,
    Path(caterer_id): Path<i64>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<QuoteResponse>> {
    let quote = resolve_quote(
        &state.pool,
        QuoteSelection {
            caterer_id,
            entries: &payload.selected_items,
            guest_count: payload.guest_count,
            misc_cost: payload.misc_cost,
            quantity_mode: payload
                .quantity_mode
                .unwrap_or(state.config.default_quantity_mode),
        },
    )
    .await?;
    Ok(Json(quote.into_response()))
}

//! Caterer API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/caterers | GET, POST | List / create caterers |
//! | /api/caterers/{id} | GET, PUT | Profile |
//! | /api/caterers/{id}/pricing | PUT | Replace surcharge and discount table |
//! | /api/caterers/{id}/discount-preview | GET | Tier hit for `?guestCount=` |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/caterers", get(handler::list).post(handler::create))
        .route(
            "/api/caterers/{id}",
            get(handler::get_by_id).put(handler::update),
        )
        .route("/api/caterers/{id}/pricing", put(handler::update_pricing))
        .route(
            "/api/caterers/{id}/discount-preview",
            get(handler::discount_preview),
        )
}

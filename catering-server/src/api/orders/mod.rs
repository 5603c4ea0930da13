//! Order API module
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/orders | POST | Book an order (pricing frozen at booking) |
//! | /api/orders/{id} | GET | Stored order with lines |
//! | /api/orders/{id}/status | PUT | Lifecycle transition |
//! | /api/caterers/{id}/orders | GET | Caterer's orders, `?status=` filter |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::create))
        .route("/api/orders/{id}", get(handler::get_by_id))
        .route("/api/orders/{id}/status", put(handler::update_status))
        .route("/api/caterers/{id}/orders", get(handler::list_by_caterer))
}

//! Quote preview API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/caterers/{id}/quote", post(handler::preview))
}

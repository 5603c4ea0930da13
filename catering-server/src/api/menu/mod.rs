//! Menu API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/caterers/{id}/menu",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/menu-items/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

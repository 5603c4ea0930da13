use std::time::Duration;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::core::ServerState;

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(
        target: "http_access",
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{} {} {}",
        method,
        uri,
        status
    );

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::caterers::router())
        .merge(crate::api::menu::router())
        .merge(crate::api::quotes::router())
        .merge(crate::api::orders::router())
}

/// Router with state and middleware applied, ready to serve
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_app()
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use catering_server::{Config, ServerState, build_router};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Router over a fresh in-memory database
pub async fn test_app() -> Router {
    let state = ServerState::initialize(&Config::in_memory())
        .await
        .expect("in-memory database");
    build_router(state)
}

/// Send one request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Caterer with misc cost 50 and a single 10% tier from 5 guests
pub async fn seed_caterer(app: &Router) -> i64 {
    let (status, body) = post(
        app,
        "/api/caterers",
        json!({
            "name": "Spice Route",
            "contactEmail": "kitchen@spiceroute.example",
            "miscCost": 50,
            "discountRules": [{ "min": 5, "discount": 10 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn seed_item(app: &Router, caterer_id: i64, name: &str, price: f64, available: bool) -> i64 {
    let (status, body) = post(
        app,
        &format!("/api/caterers/{caterer_id}/menu"),
        json!({ "name": name, "unitPrice": price, "isAvailable": available }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().unwrap()
}

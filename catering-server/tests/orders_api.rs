mod common;

use axum::Router;
use common::{get, post, put, seed_caterer, seed_item, test_app};
use http::StatusCode;
use serde_json::{Value, json};

async fn book(app: &Router, caterer_id: i64, item_id: i64) -> Value {
    let (status, body) = post(
        app,
        "/api/orders",
        json!({
            "catererId": caterer_id,
            "customer": { "name": "Asha", "email": "asha@example.com", "phone": "555-0101" },
            "eventDate": "2026-12-01",
            "guestCount": 5,
            "selectedItems": [{ "itemId": item_id, "quantity": 2 }],
            "note": "Outdoor venue"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

#[tokio::test]
async fn test_booking_stores_frozen_quote() {
    let app = test_app().await;
    let caterer_id = seed_caterer(&app).await;
    let item_id = seed_item(&app, caterer_id, "Biryani", 100.0, true).await;

    let booked = book(&app, caterer_id, item_id).await;
    assert_eq!(booked["status"], "PENDING");
    assert_eq!(booked["subtotal"], 1000.0);
    assert_eq!(booked["discountAmount"], 105.0);
    assert_eq!(booked["total"], 945.0);
    let order_id = booked["id"].as_i64().unwrap();

    // The caterer edits prices and removes the discount after the booking
    let (status, _) = put(
        &app,
        &format!("/api/menu-items/{item_id}"),
        json!({ "unitPrice": 250 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = put(
        &app,
        &format!("/api/caterers/{caterer_id}/pricing"),
        json!({ "miscCost": 0, "discountRules": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, stored) = get(&app, &format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["total"], 945.0);
    assert_eq!(stored["miscCost"], 50.0);
    assert_eq!(stored["discountPercent"], 10.0);
    assert_eq!(stored["lines"][0]["unitPrice"], 100.0);
    assert_eq!(stored["lines"][0]["lineTotal"], 1000.0);
    assert_eq!(stored["customerPhone"], "555-0101");
}

#[tokio::test]
async fn test_booking_validation() {
    let app = test_app().await;
    let caterer_id = seed_caterer(&app).await;
    let item_id = seed_item(&app, caterer_id, "Biryani", 100.0, true).await;

    let (status, body) = post(
        &app,
        "/api/orders",
        json!({
            "catererId": caterer_id,
            "customer": { "name": "Asha", "email": "asha@example.com" },
            "eventDate": "31/12/2026",
            "guestCount": 5,
            "selectedItems": [{ "itemId": item_id, "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4006);

    let (status, body) = post(
        &app,
        "/api/orders",
        json!({
            "catererId": caterer_id,
            "customer": { "name": "Asha", "email": "asha@example.com" },
            "eventDate": "2026-12-31",
            "guestCount": 0,
            "selectedItems": [{ "itemId": item_id, "quantity": 2 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_status_lifecycle_over_http() {
    let app = test_app().await;
    let caterer_id = seed_caterer(&app).await;
    let item_id = seed_item(&app, caterer_id, "Biryani", 100.0, true).await;
    let order_id = book(&app, caterer_id, item_id).await["id"].as_i64().unwrap();
    let uri = format!("/api/orders/{order_id}/status");

    let (status, body) = put(&app, &uri, json!({ "status": "COMPLETED" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);

    let (status, body) = put(&app, &uri, json!({ "status": "CONFIRMED" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "CONFIRMED");
    assert_eq!(body["total"], 945.0);

    let (status, _) = put(&app, &uri, json!({ "status": "COMPLETED" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = put(&app, &uri, json!({ "status": "CANCELLED" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_orders_for_caterer() {
    let app = test_app().await;
    let caterer_id = seed_caterer(&app).await;
    let item_id = seed_item(&app, caterer_id, "Biryani", 100.0, true).await;
    book(&app, caterer_id, item_id).await;
    let second = book(&app, caterer_id, item_id).await["id"].as_i64().unwrap();
    put(
        &app,
        &format!("/api/orders/{second}/status"),
        json!({ "status": "CANCELLED" }),
    )
    .await;

    let (status, body) = get(&app, &format!("/api/caterers/{caterer_id}/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get(&app, &format!("/api/caterers/{caterer_id}/orders?status=CANCELLED")).await;
    let cancelled = body.as_array().unwrap();
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0]["id"], second);

    let (status, _) = get(&app, "/api/orders/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

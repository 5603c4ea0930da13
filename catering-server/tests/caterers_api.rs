mod common;

use common::{get, post, put, seed_caterer, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_caterer() {
    let app = test_app().await;
    let id = seed_caterer(&app).await;

    let (status, body) = get(&app, &format!("/api/caterers/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Spice Route");
    assert_eq!(body["miscCost"], 50.0);
    assert_eq!(body["discountRules"], json!([{ "min": 5, "discount": 10.0 }]));

    let (status, body) = get(&app, "/api/caterers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_caterer_is_404() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/caterers/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);
}

#[tokio::test]
async fn test_pricing_settings_validation() {
    let app = test_app().await;
    let id = seed_caterer(&app).await;
    let uri = format!("/api/caterers/{id}/pricing");

    let (status, body) = put(&app, &uri, json!({ "discountRules": [{ "min": 10 }] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7002);
    assert_eq!(body["message"], "All discount rule fields are required");

    let (status, body) = put(
        &app,
        &uri,
        json!({ "discountRules": [{ "min": 10, "discount": 5 }, { "min": 10, "discount": 8 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7003);

    let (status, body) = put(&app, &uri, json!({ "miscCost": -1, "discountRules": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7004);

    // Failed updates leave the stored table alone
    let (_, body) = get(&app, &format!("/api/caterers/{id}")).await;
    assert_eq!(body["discountRules"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_pricing_settings_replace_and_preview() {
    let app = test_app().await;
    let id = seed_caterer(&app).await;

    let (status, body) = put(
        &app,
        &format!("/api/caterers/{id}/pricing"),
        json!({
            "miscCost": 25,
            "discountRules": [
                { "min": 50, "discount": 10 },
                { "min": 10, "discount": 5 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["miscCost"], 25.0);
    assert_eq!(body["discountRules"][0]["min"], 10);
    assert_eq!(body["discountRules"][1]["min"], 50);

    let (status, body) = get(&app, &format!("/api/caterers/{id}/discount-preview?guestCount=12")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discountPercent"], 5.0);
    assert_eq!(body["appliedRule"]["min"], 10);
    assert_eq!(body["nextTier"]["guestsNeeded"], 38);

    let (_, body) = get(&app, &format!("/api/caterers/{id}/discount-preview?guestCount=3")).await;
    assert_eq!(body["discountPercent"], 0.0);
    assert!(body.get("appliedRule").is_none());
}

#[tokio::test]
async fn test_create_caterer_requires_name() {
    let app = test_app().await;
    let (status, body) = post(&app, "/api/caterers", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
}

#[tokio::test]
async fn test_menu_crud() {
    let app = test_app().await;
    let id = seed_caterer(&app).await;
    let item_id = common::seed_item(&app, id, "Biryani", 100.0, true).await;

    let (status, body) = post(
        &app,
        &format!("/api/caterers/{id}/menu"),
        json!({ "name": "Biryani", "unitPrice": 90 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6002);

    let (status, body) = post(
        &app,
        &format!("/api/caterers/{id}/menu"),
        json!({ "name": "Kheer", "unitPrice": -3 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);

    let (status, body) = put(
        &app,
        &format!("/api/menu-items/{item_id}"),
        json!({ "unitPrice": 120, "isAvailable": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unitPrice"], 120.0);
    assert_eq!(body["isAvailable"], false);

    let (_, body) = get(&app, &format!("/api/caterers/{id}/menu?availableOnly=true")).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = common::send(
        &app,
        http::Method::DELETE,
        &format!("/api/menu-items/{item_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = get(&app, &format!("/api/menu-items/{item_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

//! Integration tests for catalog handlers

mod common;

use crate::common::{create_test_app_state, send_get, send_json};

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use shop_server::build_router;

#[tokio::test]
async fn create_then_get_product() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (status, body) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Football", "category": "Football", "price": 29.99}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["product"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_get(&app, &format!("/products/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Football");
    assert_eq!(body["product"]["price"], 29.99);
}

#[tokio::test]
async fn create_product_requires_name_category_and_price() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    for body in [
        json!({"category": "Football", "price": 1.0}),
        json!({"name": "Ball", "price": 1.0}),
        json!({"name": "Ball", "category": "Football"}),
        json!({"name": "Ball", "category": "Football", "price": -1.0}),
    ] {
        let (status, response) = send_json(&app, "POST", "/products", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{response}");
        assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn list_returns_all_products() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    for name in ["Football", "Racket", "Dumbbell"] {
        send_json(
            &app,
            "POST",
            "/products",
            json!({"name": name, "category": "Misc", "price": 10.0}),
        )
        .await;
    }

    let (status, body) = send_get(&app, "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn random_sample_is_capped_at_six() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    for i in 0..10 {
        send_json(
            &app,
            "POST",
            "/products",
            json!({"name": format!("Item {i}"), "category": "Misc", "price": 1.0}),
        )
        .await;
    }

    let (status, body) = send_get(&app, "/products/random", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn get_unknown_product_is_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (status, body) = send_get(&app, &format!("/products/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = send_get(&app, "/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_is_partial_and_lookup_first() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_, body) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Football", "category": "Football", "price": 29.99}),
    )
    .await;
    let id = body["product"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/products/{}", id),
        json!({"price": 24.99, "rating": 4.5}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Football");
    assert_eq!(body["product"]["price"], 24.99);
    assert_eq!(body["product"]["rating"], 4.5);

    // Unknown target is a 404, not a silent no-op
    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/products/{}", Uuid::new_v4()),
        json!({"price": 1.0}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_product() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let (_, body) = send_json(
        &app,
        "POST",
        "/products",
        json!({"name": "Football", "category": "Football", "price": 29.99}),
    )
    .await;
    let id = body["product"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/products/{}", id),
        serde_json::Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted successfully");

    let (status, _) = send_get(&app, &format!("/products/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports the absence
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/products/{}", id),
        serde_json::Value::Null,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

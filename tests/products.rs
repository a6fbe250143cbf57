mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, request, setup_app};

#[tokio::test]
async fn test_product_read_after_write() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let payload = json!({
        "name": "Terracotta Vase",
        "description": "Hand-thrown terracotta vase",
        "price": "1250.00",
        "discount_percent": 10,
        "category": "decor",
        "image_url": "https://example.com/vase.jpg",
        "stock_quantity": 4,
        "stock_status": "limited",
        "is_customizable": true,
        "featured": true
    });

    let (status, created) =
        request(&app, Method::POST, "/api/products", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    let id = created["id"].as_str().expect("id missing").to_string();

    let (status, fetched) =
        request(&app, Method::GET, &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Terracotta Vase");
    assert_eq!(fetched["price"], "1250.00");
    assert_eq!(fetched["discount_percent"], 10);
    assert_eq!(fetched["category"], "decor");
    assert_eq!(fetched["stock_status"], "limited");
    assert_eq!(fetched["stock_quantity"], 4);
    assert_eq!(fetched["is_customizable"], true);
    assert_eq!(fetched["featured"], true);
    // Server-side defaults for omitted fields.
    assert_eq!(fetched["is_enabled"], true);
}

#[tokio::test]
async fn test_product_patch_and_delete() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(&admin),
        Some(json!({
            "name": "Jute Basket",
            "description": "Woven basket",
            "price": "450.00",
            "category": "crafts"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id missing").to_string();

    let (status, patched) = request(
        &app,
        Method::PATCH,
        &format!("/api/products/{id}"),
        Some(&admin),
        Some(json!({
            "price": "399.00",
            "stock_status": "out_of_stock"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["price"], "399.00");
    assert_eq!(patched["stock_status"], "out_of_stock");
    assert_eq!(patched["name"], "Jute Basket");

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/products/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request(&app, Method::GET, &format!("/api/products/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_validation_rejected() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    // Price must be a decimal-formatted string with at most two places.
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(&admin),
        Some(json!({
            "name": "Bad Price",
            "description": "x",
            "price": "12.345",
            "category": "gifts"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(&admin),
        Some(json!({
            "name": "",
            "description": "x",
            "price": "12.00",
            "category": "gifts"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing slipped through.
    let (status, list) = request(&app, Method::GET, "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_missing_product_is_404() {
    let app = setup_app().await;

    let (status, _) = request(
        &app,
        Method::GET,
        "/api/products/ffffffffffffffffffffffffffffffff",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

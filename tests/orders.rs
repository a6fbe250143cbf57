mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, request, setup_app};

async fn create_product(app: &axum::Router, admin: &str, name: &str, price: &str) -> String {
    let (status, created) = request(
        app,
        Method::POST,
        "/api/products",
        Some(admin),
        Some(json!({
            "name": name,
            "description": "test product",
            "price": price,
            "category": "gifts"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    created["id"].as_str().expect("id missing").to_string()
}

#[tokio::test]
async fn test_order_items_are_snapshots() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;
    let product_id = create_product(&app, &admin, "Clay Diya", "150.00").await;

    // Order creation is public.
    let (status, order) = request(
        &app,
        Method::POST,
        "/api/orders",
        None,
        Some(json!({
            "customer_name": "Asha Rao",
            "customer_email": "asha@example.com",
            "shipping_address": "12 MG Road, Bengaluru",
            "total_amount": "450.00",
            "items": [
                { "product_id": product_id, "product_name": "Clay Diya", "quantity": 2, "price": "150.00" },
                { "product_id": product_id, "product_name": "Clay Diya", "quantity": 1, "price": "150.00" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "order create failed: {order}");
    let order_id = order["id"].as_str().expect("id missing").to_string();
    assert_eq!(order["status"], "new");
    assert_eq!(order["payment_status"], "pending");

    // Later product edits must not reach back into the order.
    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/api/products/{product_id}"),
        Some(&admin),
        Some(json!({ "name": "Renamed Diya", "price": "999.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) =
        request(&app, Method::GET, &format!("/api/orders/{order_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = fetched["items"].as_array().expect("items missing");
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["product_name"], "Clay Diya");
        assert_eq!(item["price"], "150.00");
    }

    // Deleting the product leaves the historical rows untouched.
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/products/{product_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) =
        request(&app, Method::GET, &format!("/api/orders/{order_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["items"].as_array().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn test_order_listing_is_admin_only() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/orders",
        None,
        Some(json!({
            "customer_name": "Ravi Kumar",
            "customer_email": "ravi@example.com",
            "shipping_address": "5 Park Street, Kolkata",
            "total_amount": "100.00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = request(&app, Method::GET, "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, list) = request(&app, Method::GET, "/api/orders", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn test_order_status_overwrite() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, order) = request(
        &app,
        Method::POST,
        "/api/orders",
        None,
        Some(json!({
            "customer_name": "Meera Nair",
            "customer_email": "meera@example.com",
            "shipping_address": "8 Beach Road, Kochi",
            "total_amount": "250.00",
            "is_custom_order": true,
            "custom_order_details": "Nameplate with peacock motif"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = order["id"].as_str().expect("id missing").to_string();
    assert_eq!(order["is_custom_order"], true);

    let (status, patched) = request(
        &app,
        Method::PATCH,
        &format!("/api/orders/{order_id}"),
        Some(&admin),
        Some(json!({ "status": "in_progress", "payment_status": "paid" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "in_progress");
    assert_eq!(patched["payment_status"], "paid");

    // No transition table: cancelled is reachable from anywhere.
    let (status, patched) = request(
        &app,
        Method::PATCH,
        &format!("/api/orders/{order_id}"),
        Some(&admin),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "cancelled");

    // Patching orders is an admin concern.
    let (status, _) = request(
        &app,
        Method::PATCH,
        &format!("/api/orders/{order_id}"),
        None,
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_order_validation_rejected() {
    let app = setup_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/orders",
        None,
        Some(json!({
            "customer_name": "No Email",
            "customer_email": "not-an-email",
            "shipping_address": "somewhere",
            "total_amount": "100.00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Item quantity below one is rejected through the nested validator.
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/orders",
        None,
        Some(json!({
            "customer_name": "Zero Quantity",
            "customer_email": "zero@example.com",
            "shipping_address": "somewhere",
            "total_amount": "100.00",
            "items": [
                { "product_name": "Thing", "quantity": 0, "price": "100.00" }
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_order_is_404() {
    let app = setup_app().await;

    let (status, _) = request(
        &app,
        Method::GET,
        "/api/orders/ffffffffffffffffffffffffffffffff",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

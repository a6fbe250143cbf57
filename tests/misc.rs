mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, login, request, setup_app};

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let (status, body) = request(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_testimonial_submission_and_listing() {
    let app = setup_app().await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/testimonials",
        None,
        Some(json!({
            "author_name": "Lata Iyer",
            "content": "Beautiful work, arrived safely.",
            "rating": 4
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], 4);

    // Rating defaults to five when omitted.
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/testimonials",
        None,
        Some(json!({
            "author_name": "Quiet Fan",
            "content": "Lovely."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], 5);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/testimonials",
        None,
        Some(json!({
            "author_name": "Too Generous",
            "content": "Six stars!",
            "rating": 6
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, list) = request(&app, Method::GET, "/api/testimonials", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn test_contact_flow() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/contacts",
        None,
        Some(json!({
            "name": "Priya Menon",
            "email": "priya@example.com",
            "subject": "Custom commission",
            "message": "Can you paint a family portrait?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["is_read"], false);
    let contact_id = created["id"].as_str().expect("id missing").to_string();

    // Reading the inbox is an admin concern.
    let (status, _) = request(&app, Method::GET, "/api/contacts", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, list) = request(&app, Method::GET, "/api/contacts", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));

    let (status, patched) = request(
        &app,
        Method::PATCH,
        &format!("/api/contacts/{contact_id}"),
        Some(&admin),
        Some(json!({ "is_read": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["is_read"], true);
    assert_eq!(patched["subject"], "Custom commission");
}

#[tokio::test]
async fn test_gallery_admin_gate_and_delete() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let payload = json!({
        "title": "Studio corner",
        "image_url": "https://example.com/studio.jpg",
        "category": "behind-the-scenes"
    });

    let (status, _) = request(&app, Method::POST, "/api/gallery", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, created) =
        request(&app, Method::POST, "/api/gallery", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = created["id"].as_str().expect("id missing").to_string();

    let (status, list) = request(&app, Method::GET, "/api/gallery", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/gallery/{item_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = request(&app, Method::GET, "/api/gallery", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_product_like_flow() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/products",
        Some(&admin),
        Some(json!({
            "name": "Brass Bell",
            "description": "Small temple bell",
            "price": "320.00",
            "category": "gifts"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = created["id"].as_str().expect("id missing").to_string();

    // Liking requires a logged-in user.
    let (status, _) = request(
        &app,
        Method::POST,
        &format!("/api/products/{product_id}/like"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "LikerOne", "password": "Muzion15pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = login(&app, "LikerOne", "Muzion15pass").await;

    let (status, _) = request(
        &app,
        Method::POST,
        &format!("/api/products/{product_id}/like"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Liking twice is idempotent.
    let (status, _) = request(
        &app,
        Method::POST,
        &format!("/api/products/{product_id}/like"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(
        &app,
        Method::GET,
        &format!("/api/products/{product_id}/likes"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/products/{product_id}/like"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Unliking again finds nothing to remove.
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/products/{product_id}/like"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = request(
        &app,
        Method::GET,
        &format!("/api/products/{product_id}/likes"),
        None,
        None,
    )
    .await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_like_missing_product_is_404() {
    let app = setup_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "LikerTwo", "password": "Muzion15pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = login(&app, "LikerTwo", "Muzion15pass").await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/products/ffffffffffffffffffffffffffffffff/like",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

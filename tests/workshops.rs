mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, request, setup_app};

async fn create_workshop(app: &axum::Router, admin: &str, title: &str, max_seats: i32) -> String {
    let (status, created) = request(
        app,
        Method::POST,
        "/api/workshops",
        Some(admin),
        Some(json!({
            "title": title,
            "description": "test workshop",
            "date": "2026-09-12T10:00:00Z",
            "time": "10:00 AM",
            "duration": "3 hours",
            "venue": "Studio One, Jaipur",
            "price": "800.00",
            "max_seats": max_seats
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "workshop create failed: {created}");
    assert_eq!(created["booked_seats"], 0);
    assert_eq!(created["is_past"], false);
    created["id"].as_str().expect("id missing").to_string()
}

#[tokio::test]
async fn test_booking_increments_seats_by_party_size() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;
    let workshop_id = create_workshop(&app, &admin, "Block Printing", 20).await;

    let (status, booking) = request(
        &app,
        Method::POST,
        "/api/workshop-bookings",
        None,
        Some(json!({
            "workshop_id": workshop_id,
            "attendee_name": "Kiran Shah",
            "email": "kiran@example.com",
            "number_of_seats": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["number_of_seats"], 3);
    assert_eq!(booking["payment_status"], "pending");

    let (_, fetched) =
        request(&app, Method::GET, &format!("/api/workshops/{workshop_id}"), None, None).await;
    assert_eq!(fetched["booked_seats"], 3);

    // Omitted seat count falls back to a party of one.
    let (status, booking) = request(
        &app,
        Method::POST,
        "/api/workshop-bookings",
        None,
        Some(json!({
            "workshop_id": workshop_id,
            "attendee_name": "Solo Guest",
            "email": "solo@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["number_of_seats"], 1);

    let (_, fetched) =
        request(&app, Method::GET, &format!("/api/workshops/{workshop_id}"), None, None).await;
    assert_eq!(fetched["booked_seats"], 4);
}

#[tokio::test]
async fn test_booking_with_missing_workshop_is_tolerated() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;

    let (status, booking) = request(
        &app,
        Method::POST,
        "/api/workshop-bookings",
        None,
        Some(json!({
            "workshop_id": "ffffffffffffffffffffffffffffffff",
            "attendee_name": "Orphan Booking",
            "email": "orphan@example.com",
            "number_of_seats": 2
        })),
    )
    .await;
    // Booking row lands; the seat counter has nothing to update.
    assert_eq!(status, StatusCode::CREATED);
    assert!(booking["id"].is_string());

    let (status, list) =
        request(&app, Method::GET, "/api/workshop-bookings", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn test_booking_listing_filters_by_workshop() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;
    let first = create_workshop(&app, &admin, "Pottery Wheel", 10).await;
    let second = create_workshop(&app, &admin, "Madhubani Painting", 10).await;

    for (workshop_id, name) in [(&first, "Guest A"), (&second, "Guest B"), (&second, "Guest C")] {
        let (status, _) = request(
            &app,
            Method::POST,
            "/api/workshop-bookings",
            None,
            Some(json!({
                "workshop_id": workshop_id,
                "attendee_name": name,
                "email": "guest@example.com"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = request(&app, Method::GET, "/api/workshop-bookings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, list) = request(
        &app,
        Method::GET,
        &format!("/api/workshop-bookings?workshopId={second}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(2));
}

#[tokio::test]
async fn test_workshop_patch_and_delete() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;
    let workshop_id = create_workshop(&app, &admin, "Editable Workshop", 15).await;

    let (status, patched) = request(
        &app,
        Method::PATCH,
        &format!("/api/workshops/{workshop_id}"),
        Some(&admin),
        Some(json!({ "is_past": true, "price": "950.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["is_past"], true);
    assert_eq!(patched["price"], "950.00");

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/workshops/{workshop_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        request(&app, Method::GET, &format!("/api/workshops/{workshop_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_clear_is_admin_only() {
    let app = setup_app().await;
    let admin = admin_token(&app).await;
    create_workshop(&app, &admin, "One", 10).await;
    create_workshop(&app, &admin, "Two", 10).await;

    let (status, _) = request(&app, Method::DELETE, "/api/workshops", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, list) = request(&app, Method::GET, "/api/workshops", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(2));

    let (status, _) = request(&app, Method::DELETE, "/api/workshops", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = request(&app, Method::GET, "/api/workshops", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(|a| a.len()), Some(0));
}

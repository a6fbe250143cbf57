use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sea_orm::{prelude::DateTimeUtc, DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::order::PaymentStatus;
use crate::entities::user::Role;
use crate::entities::{workshop, workshop_booking};
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::middleware::logging::{to_response, ApiError};
use crate::routes::PRICE_REGEX;
use crate::storage::workshops;

// ROUTERS
pub fn workshop_routes() -> Router {
    Router::new()
        .route("/workshops", get(get_workshops))
        .route("/workshops/:id", get(get_workshop))
        .route("/workshop-bookings", post(create_booking))
}

pub fn admin_workshop_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/workshops", post(create_workshop).delete(clear_workshops))
        .route(
            "/workshops/:id",
            axum::routing::patch(patch_workshop).delete(delete_workshop),
        )
        .route("/workshop-bookings", get(get_bookings))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES
async fn get_workshops(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match workshops::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn get_workshop(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match workshops::get(&*db, &id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(json!(item))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No workshop with {} id was found", id)
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn create_workshop(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateWorkshop>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Validation failed",
                "details": errors
            })),
        );
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    let new_workshop = workshop::ActiveModel {
        title: Set(payload.title),
        description: Set(payload.description),
        date: Set(payload.date),
        time: Set(payload.time),
        duration: Set(payload.duration),
        venue: Set(payload.venue),
        price: Set(payload.price),
        max_seats: Set(payload.max_seats),
        booked_seats: Set(0),
        image_url: Set(payload.image_url),
        is_past: Set(false),
        ..Default::default()
    };

    match workshops::create(&txn, new_workshop).await {
        Ok(created) => match txn.commit().await {
            Ok(_) => (StatusCode::CREATED, Json(json!(created))),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
        },
        Err(_) => {
            let _ = txn.rollback().await;
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Failed to create workshop"
                })),
            )
        }
    }
}

async fn patch_workshop(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchWorkshop>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Validation failed",
                "details": errors
            })),
        );
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    match workshops::get(&txn, &id).await {
        Ok(Some(existing)) => {
            let mut model: workshop::ActiveModel = existing.into();

            if let Some(title) = payload.title {
                model.title = Set(title);
            }
            if let Some(description) = payload.description {
                model.description = Set(description);
            }
            if let Some(date) = payload.date {
                model.date = Set(date);
            }
            if let Some(time) = payload.time {
                model.time = Set(time);
            }
            if let Some(duration) = payload.duration {
                model.duration = Set(duration);
            }
            if let Some(venue) = payload.venue {
                model.venue = Set(venue);
            }
            if let Some(price) = payload.price {
                model.price = Set(price);
            }
            if let Some(max_seats) = payload.max_seats {
                model.max_seats = Set(max_seats);
            }
            if let Some(image_url) = payload.image_url {
                model.image_url = Set(Some(image_url));
            }
            if let Some(is_past) = payload.is_past {
                model.is_past = Set(is_past);
            }

            match workshops::update(&txn, model).await {
                Ok(updated) => match txn.commit().await {
                    Ok(_) => (StatusCode::OK, Json(json!(updated))),
                    Err(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": "Internal server error"
                        })),
                    ),
                },
                Err(_) => {
                    let _ = txn.rollback().await;
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "Failed to patch this resource"
                        })),
                    )
                }
            }
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No workshop with {} id was found", id)
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn delete_workshop(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match workshops::delete(&*db, &id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No workshop with {} id was found", id)
            })),
        ),
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "message": "Resource deleted successfully"
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

/// Bulk clear used by the back office when rebuilding the season's schedule.
async fn clear_workshops(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match workshops::delete_all(&*db).await {
        Ok(deleted) => (
            StatusCode::OK,
            Json(json!({
                "message": "Workshops cleared",
                "deleted": deleted
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn get_bookings(
    Query(query): Query<BookingsQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match workshops::list_bookings(&*db, query.workshop_id.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

/// Public write path, same shape as class registrations: booking row plus
/// seat-counter bump in one transaction, no server-side capacity check.
async fn create_booking(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateBooking>,
) -> Response {
    if let Err(errors) = payload.validate() {
        return to_response(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Validation failed",
                    "details": errors
                })),
            ),
            Err(ApiError::ValidationFail(errors.to_string())),
        );
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(_) => {
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::TransactionCreationFailed),
            );
        }
    };

    let new_booking = workshop_booking::ActiveModel {
        workshop_id: Set(payload.workshop_id),
        attendee_name: Set(payload.attendee_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        number_of_seats: Set(payload.number_of_seats.unwrap_or(1)),
        payment_status: Set(payload.payment_status.unwrap_or(PaymentStatus::Pending)),
        ..Default::default()
    };

    match workshops::create_booking(&txn, new_booking).await {
        Ok(created) => match txn.commit().await {
            Ok(_) => to_response((StatusCode::CREATED, Json(json!(created))), Ok(())),
            Err(err) => to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            ),
        },
        Err(err) => {
            let _ = txn.rollback().await;
            to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to create booking"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            )
        }
    }
}

// structs
#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateWorkshop {
    #[validate(length(min = 1, max = 255))]
    title: String,
    description: String,
    date: DateTimeUtc,
    time: String,
    duration: String,
    venue: String,
    #[validate(regex(path = *PRICE_REGEX))]
    price: String,
    #[validate(range(min = 1))]
    max_seats: i32,
    image_url: Option<String>,
}

#[derive(Deserialize, Validate)]
struct PatchWorkshop {
    #[validate(length(min = 1, max = 255))]
    title: Option<String>,
    description: Option<String>,
    date: Option<DateTimeUtc>,
    time: Option<String>,
    duration: Option<String>,
    venue: Option<String>,
    #[validate(regex(path = *PRICE_REGEX))]
    price: Option<String>,
    #[validate(range(min = 1))]
    max_seats: Option<i32>,
    image_url: Option<String>,
    is_past: Option<bool>,
}

#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateBooking {
    #[validate(length(min = 1))]
    workshop_id: String,
    #[validate(length(min = 1, max = 255))]
    attendee_name: String,
    #[validate(email)]
    email: String,
    phone: Option<String>,
    #[validate(range(min = 1))]
    number_of_seats: Option<i32>,
    payment_status: Option<PaymentStatus>,
}

#[derive(Deserialize)]
struct BookingsQuery {
    #[serde(rename = "workshopId")]
    workshop_id: Option<String>,
}

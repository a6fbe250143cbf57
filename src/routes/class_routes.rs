use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::art_class::{self, AgeGroup, ClassFormat, SkillLevel};
use crate::entities::class_registration;
use crate::entities::order::PaymentStatus;
use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::middleware::logging::{to_response, ApiError};
use crate::routes::PRICE_REGEX;
use crate::storage::classes;

// ROUTERS
pub fn class_routes() -> Router {
    Router::new()
        .route("/classes", get(get_classes))
        .route("/classes/:id", get(get_class))
        .route("/class-registrations", post(create_registration))
}

pub fn admin_class_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/classes", post(create_class))
        .route("/classes/:id", patch(patch_class).delete(delete_class))
        .route("/class-registrations", get(get_registrations))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES
async fn get_classes(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match classes::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn get_class(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match classes::get(&*db, &id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(json!(item))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No class with {} id was found", id)
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

async fn create_class(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateClass>,
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

    // enrolled_count always starts at zero; it is server-maintained.
    let new_class = art_class::ActiveModel {
        title: Set(payload.title),
        description: Set(payload.description),
        age_group: Set(payload.age_group),
        skill_level: Set(payload.skill_level),
        format: Set(payload.format),
        duration: Set(payload.duration),
        schedule: Set(payload.schedule),
        price: Set(payload.price),
        max_students: Set(payload.max_students.unwrap_or(10)),
        enrolled_count: Set(0),
        image_url: Set(payload.image_url),
        is_active: Set(payload.is_active.unwrap_or(true)),
        ..Default::default()
    };

    match classes::create(&txn, new_class).await {
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
                    "error": "Failed to create class"
                })),
            )
        }
    }
}

async fn patch_class(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchClass>,
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

    match classes::get(&txn, &id).await {
        Ok(Some(existing)) => {
            let mut model: art_class::ActiveModel = existing.into();

            if let Some(title) = payload.title {
                model.title = Set(title);
            }
            if let Some(description) = payload.description {
                model.description = Set(description);
            }
            if let Some(age_group) = payload.age_group {
                model.age_group = Set(age_group);
            }
            if let Some(skill_level) = payload.skill_level {
                model.skill_level = Set(skill_level);
            }
            if let Some(format) = payload.format {
                model.format = Set(format);
            }
            if let Some(duration) = payload.duration {
                model.duration = Set(duration);
            }
            if let Some(schedule) = payload.schedule {
                model.schedule = Set(schedule);
            }
            if let Some(price) = payload.price {
                model.price = Set(price);
            }
            if let Some(max_students) = payload.max_students {
                model.max_students = Set(max_students);
            }
            if let Some(image_url) = payload.image_url {
                model.image_url = Set(Some(image_url));
            }
            if let Some(is_active) = payload.is_active {
                model.is_active = Set(is_active);
            }

            match classes::update(&txn, model).await {
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
                "error": format!("No class with {} id was found", id)
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

async fn delete_class(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match classes::delete(&*db, &id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No class with {} id was found", id)
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

async fn get_registrations(
    Query(query): Query<RegistrationsQuery>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match classes::list_registrations(&*db, query.class_id.as_deref()).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

/// Public write path. The registration row and the enrolled-counter bump
/// share one transaction, but there is no capacity check: the storefront
/// disables the button on a full class, the server does not re-validate.
async fn create_registration(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateRegistration>,
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

    let new_registration = class_registration::ActiveModel {
        class_id: Set(payload.class_id),
        student_name: Set(payload.student_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        parent_name: Set(payload.parent_name),
        payment_status: Set(payload.payment_status.unwrap_or(PaymentStatus::Pending)),
        ..Default::default()
    };

    match classes::create_registration(&txn, new_registration).await {
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
                        "error": "Failed to create registration"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            )
        }
    }
}

// structs
#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateClass {
    #[validate(length(min = 1, max = 255))]
    title: String,
    description: String,
    age_group: AgeGroup,
    skill_level: SkillLevel,
    format: ClassFormat,
    duration: String,
    schedule: String,
    #[validate(regex(path = *PRICE_REGEX))]
    price: String,
    #[validate(range(min = 1))]
    max_students: Option<i32>,
    image_url: Option<String>,
    is_active: Option<bool>,
}

#[derive(Deserialize, Validate)]
struct PatchClass {
    #[validate(length(min = 1, max = 255))]
    title: Option<String>,
    description: Option<String>,
    age_group: Option<AgeGroup>,
    skill_level: Option<SkillLevel>,
    format: Option<ClassFormat>,
    duration: Option<String>,
    schedule: Option<String>,
    #[validate(regex(path = *PRICE_REGEX))]
    price: Option<String>,
    #[validate(range(min = 1))]
    max_students: Option<i32>,
    image_url: Option<String>,
    is_active: Option<bool>,
}

#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateRegistration {
    #[validate(length(min = 1))]
    class_id: String,
    #[validate(length(min = 1, max = 255))]
    student_name: String,
    #[validate(email)]
    email: String,
    phone: Option<String>,
    parent_name: Option<String>,
    payment_status: Option<PaymentStatus>,
}

#[derive(Deserialize)]
struct RegistrationsQuery {
    #[serde(rename = "classId")]
    class_id: Option<String>,
}

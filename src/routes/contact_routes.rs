use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::contact;
use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::storage::contacts;

// ROUTERS
pub fn contact_routes() -> Router {
    Router::new().route("/contacts", post(create_contact))
}

pub fn admin_contact_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/contacts", get(get_contacts))
        .route("/contacts/:id", patch(patch_contact))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES
async fn create_contact(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateContact>,
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

    let new_contact = contact::ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        subject: Set(payload.subject),
        message: Set(payload.message),
        is_read: Set(false),
        ..Default::default()
    };

    match contacts::create(&*db, new_contact).await {
        Ok(created) => (StatusCode::CREATED, Json(json!(created))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to create contact"
            })),
        ),
    }
}

async fn get_contacts(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match contacts::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn patch_contact(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchContact>,
) -> impl IntoResponse {
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

    match contacts::get(&txn, &id).await {
        Ok(Some(existing)) => {
            let mut model: contact::ActiveModel = existing.into();

            if let Some(is_read) = payload.is_read {
                model.is_read = Set(is_read);
            }
            if let Some(subject) = payload.subject {
                model.subject = Set(Some(subject));
            }

            match contacts::update(&txn, model).await {
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
                "error": format!("No contact with {} id was found", id)
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

// structs
#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateContact {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[validate(email)]
    email: String,
    phone: Option<String>,
    subject: Option<String>,
    #[validate(length(min = 1))]
    message: String,
}

#[derive(Deserialize)]
struct PatchContact {
    is_read: Option<bool>,
    subject: Option<String>,
}

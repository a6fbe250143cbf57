use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sea_orm::{DatabaseConnection, Set};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::gallery_item;
use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::storage::gallery;

// ROUTERS
pub fn gallery_routes() -> Router {
    Router::new().route("/gallery", get(get_gallery))
}

pub fn admin_gallery_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/gallery", post(create_gallery_item))
        .route("/gallery/:id", axum::routing::delete(delete_gallery_item))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES
async fn get_gallery(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match gallery::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn create_gallery_item(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateGalleryItem>,
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

    let new_item = gallery_item::ActiveModel {
        title: Set(payload.title),
        description: Set(payload.description),
        category: Set(payload.category),
        image_url: Set(payload.image_url),
        is_featured: Set(payload.is_featured.unwrap_or(false)),
        ..Default::default()
    };

    match gallery::create(&*db, new_item).await {
        Ok(created) => (StatusCode::CREATED, Json(json!(created))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to create gallery item"
            })),
        ),
    }
}

async fn delete_gallery_item(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match gallery::delete(&*db, &id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No gallery item with {} id was found", id)
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

// structs
#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateGalleryItem {
    #[validate(length(min = 1, max = 255))]
    title: String,
    description: Option<String>,
    #[validate(length(min = 1, max = 255))]
    category: String,
    #[validate(length(min = 1))]
    image_url: String,
    is_featured: Option<bool>,
}

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;

use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState, Claims};
use crate::storage::{likes, products};

// ROUTERS
pub fn like_routes(db: Arc<DatabaseConnection>) -> Router {
    let public = Router::new().route("/products/:id/likes", get(get_likes));

    let gated = Router::new()
        .route("/products/:id/like", post(like_product).delete(unlike_product))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::User,
            },
            auth_middleware,
        ));

    public.merge(gated)
}

// ROUTES
async fn get_likes(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match likes::count(&*db, &id).await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "count": count
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

async fn like_product(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    match products::get(&*db, &id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("No product with {} id was found", id)
                })),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    }

    match likes::create(&*db, &claims.user_id, &id).await {
        Ok((like, created)) => {
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(json!(like)))
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to like product"
            })),
        ),
    }
}

async fn unlike_product(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Extension(claims): Extension<Claims>,
) -> impl IntoResponse {
    match likes::delete(&*db, &claims.user_id, &id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({
                "message": "Like removed"
            })),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "No like to remove"
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

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use sea_orm::{DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::product::{self, Category, StockStatus};
use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::routes::PRICE_REGEX;
use crate::storage::products;

// ROUTERS
pub fn product_routes() -> Router {
    Router::new()
        .route("/products", get(get_products))
        .route("/products/:id", get(get_product))
}

pub fn admin_product_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/products", post(create_product))
        .route(
            "/products/:id",
            axum::routing::patch(patch_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES
async fn get_products(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match products::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        )
            .into_response(),
    }
}

async fn get_product(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match products::get(&*db, &id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No product with {} id was found", id)
            })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        )
            .into_response(),
    }
}

async fn create_product(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateProduct>,
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

    let new_product = product::ActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        discount_percent: Set(payload.discount_percent.unwrap_or(0)),
        category: Set(payload.category),
        image_url: Set(payload.image_url),
        additional_images: Set(payload.additional_images),
        video_url: Set(payload.video_url),
        stock_quantity: Set(payload.stock_quantity.unwrap_or(0)),
        stock_status: Set(payload.stock_status.unwrap_or(StockStatus::Available)),
        is_enabled: Set(payload.is_enabled.unwrap_or(true)),
        is_customizable: Set(payload.is_customizable.unwrap_or(false)),
        featured: Set(payload.featured.unwrap_or(false)),
        ..Default::default()
    };

    match products::create(&txn, new_product).await {
        Ok(created) => match txn.commit().await {
            Ok(_) => (StatusCode::CREATED, Json(json!(created))),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            ),
        },
        Err(err) => {
            tracing::debug!(error = %err, "Product insert failed");
            let _ = txn.rollback().await;
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Failed to create product"
                })),
            )
        }
    }
}

async fn patch_product(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchProduct>,
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

    match products::get(&txn, &id).await {
        Ok(Some(existing)) => {
            let mut model: product::ActiveModel = existing.into();

            if let Some(name) = payload.name {
                model.name = Set(name);
            }
            if let Some(description) = payload.description {
                model.description = Set(description);
            }
            if let Some(price) = payload.price {
                model.price = Set(price);
            }
            if let Some(discount_percent) = payload.discount_percent {
                model.discount_percent = Set(discount_percent);
            }
            if let Some(category) = payload.category {
                model.category = Set(category);
            }
            if let Some(image_url) = payload.image_url {
                model.image_url = Set(Some(image_url));
            }
            if let Some(additional_images) = payload.additional_images {
                model.additional_images = Set(Some(additional_images));
            }
            if let Some(video_url) = payload.video_url {
                model.video_url = Set(Some(video_url));
            }
            if let Some(stock_quantity) = payload.stock_quantity {
                model.stock_quantity = Set(stock_quantity);
            }
            if let Some(stock_status) = payload.stock_status {
                model.stock_status = Set(stock_status);
            }
            if let Some(is_enabled) = payload.is_enabled {
                model.is_enabled = Set(is_enabled);
            }
            if let Some(is_customizable) = payload.is_customizable {
                model.is_customizable = Set(is_customizable);
            }
            if let Some(featured) = payload.featured {
                model.featured = Set(featured);
            }

            match products::update(&txn, model).await {
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
                "error": format!("No product with {} id was found", id)
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

async fn delete_product(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    match products::delete(&*db, &id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": format!("No product with {} id was found", id)
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
struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    name: String,
    description: String,
    #[validate(regex(path = *PRICE_REGEX))]
    price: String,
    #[validate(range(min = 0, max = 100))]
    discount_percent: Option<i32>,
    category: Category,
    image_url: Option<String>,
    additional_images: Option<String>,
    video_url: Option<String>,
    #[validate(range(min = 0))]
    stock_quantity: Option<i32>,
    stock_status: Option<StockStatus>,
    is_enabled: Option<bool>,
    is_customizable: Option<bool>,
    featured: Option<bool>,
}

#[derive(Deserialize, Validate)]
struct PatchProduct {
    #[validate(length(min = 1, max = 255))]
    name: Option<String>,
    description: Option<String>,
    #[validate(regex(path = *PRICE_REGEX))]
    price: Option<String>,
    #[validate(range(min = 0, max = 100))]
    discount_percent: Option<i32>,
    category: Option<Category>,
    image_url: Option<String>,
    additional_images: Option<String>,
    video_url: Option<String>,
    #[validate(range(min = 0))]
    stock_quantity: Option<i32>,
    stock_status: Option<StockStatus>,
    is_enabled: Option<bool>,
    is_customizable: Option<bool>,
    featured: Option<bool>,
}

use axum::{
    extract::{Extension, Path},
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

use crate::entities::order::{self, PaymentStatus, Status};
use crate::entities::order_item;
use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::middleware::logging::{to_response, ApiError};
use crate::routes::PRICE_REGEX;
use crate::storage::orders;

// ROUTERS
pub fn order_routes() -> Router {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:id", get(get_order))
}

pub fn admin_order_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .route("/orders", get(get_orders))
        .route("/orders/:id", patch(patch_order))
        .route_layer(middleware::from_fn_with_state(
            AuthState {
                db,
                role: Role::Admin,
            },
            auth_middleware,
        ))
}

// ROUTES

/// Compound create: the order row plus one item row per cart entry, all in
/// one transaction. Item name and price are snapshots; later product edits do
/// not reach back into them. Stock is informational only and not decremented
/// here.
async fn create_order(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateOrder>,
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

    let new_order = order::ActiveModel {
        customer_name: Set(payload.customer_name),
        customer_email: Set(payload.customer_email),
        customer_phone: Set(payload.customer_phone),
        shipping_address: Set(payload.shipping_address),
        status: Set(Status::New),
        total_amount: Set(payload.total_amount),
        is_custom_order: Set(payload.is_custom_order.unwrap_or(false)),
        custom_order_details: Set(payload.custom_order_details),
        payment_status: Set(PaymentStatus::Pending),
        ..Default::default()
    };

    let created = match orders::create(&txn, new_order).await {
        Ok(created) => created,
        Err(err) => {
            let _ = txn.rollback().await;
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to create order"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            );
        }
    };

    for item in payload.items.unwrap_or_default() {
        let new_item = order_item::ActiveModel {
            order_id: Set(created.id.clone()),
            product_id: Set(item.product_id),
            product_name: Set(item.product_name),
            quantity: Set(item.quantity),
            price: Set(item.price),
            ..Default::default()
        };

        if let Err(err) = orders::create_item(&txn, new_item).await {
            let _ = txn.rollback().await;
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to create order items"
                    })),
                ),
                Err(ApiError::DbError(err.to_string())),
            );
        }
    }

    match txn.commit().await {
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
    }
}

async fn get_order(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
) -> impl IntoResponse {
    let order = match orders::get(&*db, &id).await {
        Ok(Some(order)) => order,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("No order with {} id was found", id)
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
    };

    let items = match orders::list_items(&*db, &id).await {
        Ok(items) => items,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };

    let mut body = match serde_json::to_value(&order) {
        Ok(body) => body,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error"
                })),
            );
        }
    };
    if let Some(map) = body.as_object_mut() {
        map.insert("items".to_owned(), json!(items));
    }

    (StatusCode::OK, Json(body))
}

async fn get_orders(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match orders::list(&*db).await {
        Ok(list) => (StatusCode::OK, Json(json!(list))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

/// Direct overwrite, no transition table: the back office moves orders
/// through new -> in_progress -> completed -> delivered, or to cancelled,
/// and this endpoint trusts whatever it is given.
async fn patch_order(
    Path(id): Path<String>,
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<PatchOrder>,
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

    match orders::get(&txn, &id).await {
        Ok(Some(existing)) => {
            let mut model: order::ActiveModel = existing.into();

            if let Some(status) = payload.status {
                model.status = Set(status);
            }
            if let Some(payment_status) = payload.payment_status {
                model.payment_status = Set(payment_status);
            }
            if let Some(total_amount) = payload.total_amount {
                model.total_amount = Set(total_amount);
            }

            match orders::update(&txn, model).await {
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
                "error": format!("No order with {} id was found", id)
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
struct CreateOrder {
    #[validate(length(min = 1, max = 255))]
    customer_name: String,
    #[validate(email)]
    customer_email: String,
    customer_phone: Option<String>,
    #[validate(length(min = 1))]
    shipping_address: String,
    #[validate(regex(path = *PRICE_REGEX))]
    total_amount: String,
    is_custom_order: Option<bool>,
    custom_order_details: Option<String>,
    #[validate(nested)]
    items: Option<Vec<CreateOrderItem>>,
}

#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateOrderItem {
    product_id: Option<String>,
    #[validate(length(min = 1, max = 255))]
    product_name: String,
    #[validate(range(min = 1))]
    quantity: i32,
    #[validate(regex(path = *PRICE_REGEX))]
    price: String,
}

#[derive(Deserialize, Validate)]
struct PatchOrder {
    status: Option<Status>,
    payment_status: Option<PaymentStatus>,
    #[validate(regex(path = *PRICE_REGEX))]
    total_amount: Option<String>,
}

pub mod auth_routes;
pub mod class_routes;
pub mod contact_routes;
pub mod gallery_routes;
pub mod health_routes;
pub mod like_routes;
pub mod order_routes;
pub mod product_routes;
pub mod testimonial_routes;
pub mod workshop_routes;

use axum::{Extension, Router};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::middleware::logging::logging_middleware;

/// Money travels as decimal-formatted strings, never floats. Shared by every
/// payload carrying a price or amount field.
pub(crate) static PRICE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());

use {
    auth_routes::auth_routes,
    class_routes::{admin_class_routes, class_routes},
    contact_routes::{admin_contact_routes, contact_routes},
    gallery_routes::{admin_gallery_routes, gallery_routes},
    health_routes::health_routes,
    like_routes::like_routes,
    order_routes::{admin_order_routes, order_routes},
    product_routes::{admin_product_routes, product_routes},
    testimonial_routes::testimonial_routes,
    workshop_routes::{admin_workshop_routes, workshop_routes},
};

/// Public and admin routers share paths and differ per method; the admin
/// routers carry the auth gate as a route layer so the method routers still
/// merge under the common `/api` prefix.
pub fn api_router(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .nest("/api", health_routes())
        .nest("/api", auth_routes(db.clone()))
        .nest("/api", product_routes())
        .nest("/api", admin_product_routes(db.clone()))
        .nest("/api", like_routes(db.clone()))
        .nest("/api", order_routes())
        .nest("/api", admin_order_routes(db.clone()))
        .nest("/api", class_routes())
        .nest("/api", admin_class_routes(db.clone()))
        .nest("/api", workshop_routes())
        .nest("/api", admin_workshop_routes(db.clone()))
        .nest("/api", testimonial_routes())
        .nest("/api", contact_routes())
        .nest("/api", admin_contact_routes(db.clone()))
        .nest("/api", gallery_routes())
        .nest("/api", admin_gallery_routes(db.clone()))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(Extension(db))
}

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use sea_orm::{DatabaseConnection, Set};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::testimonial;
use crate::storage::testimonials;

pub fn testimonial_routes() -> Router {
    Router::new().route("/testimonials", get(get_testimonials).post(create_testimonial))
}

async fn get_testimonials(Extension(db): Extension<Arc<DatabaseConnection>>) -> impl IntoResponse {
    match testimonials::list(&*db).await {
        Ok(items) => (StatusCode::OK, Json(json!(items))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Internal server error"
            })),
        ),
    }
}

async fn create_testimonial(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateTestimonial>,
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

    let new_testimonial = testimonial::ActiveModel {
        author_name: Set(payload.author_name),
        role: Set(payload.role),
        content: Set(payload.content),
        rating: Set(payload.rating.unwrap_or(5)),
        avatar_url: Set(payload.avatar_url),
        is_visible: Set(payload.is_visible.unwrap_or(true)),
        ..Default::default()
    };

    match testimonials::create(&*db, new_testimonial).await {
        Ok(created) => (StatusCode::CREATED, Json(json!(created))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to create testimonial"
            })),
        ),
    }
}

#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateTestimonial {
    #[validate(length(min = 1, max = 255))]
    author_name: String,
    role: Option<String>,
    #[validate(length(min = 1))]
    content: String,
    #[validate(range(min = 1, max = 5))]
    rating: Option<i32>,
    avatar_url: Option<String>,
    is_visible: Option<bool>,
}

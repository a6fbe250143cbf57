use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::Extension,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::user::Role;
use crate::middleware::auth::{auth_middleware, generate_token, AuthState, Claims};
use crate::middleware::logging::{to_response, ApiError};
use crate::storage::users;

pub fn auth_routes(db: Arc<DatabaseConnection>) -> Router {
    let public = Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let gated = Router::new()
        .route("/auth/me", get(current_user))
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
async fn register_user(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<CreateUser>,
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

    let password = match hash_password(&payload.password) {
        Ok(password) => password,
        Err(err) => {
            return to_response(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error"
                    })),
                ),
                Err(ApiError::PasswordHashFailed(err.to_string())),
            );
        }
    };

    match users::create(&*db, payload.username, password, Role::User).await {
        Ok(user) => to_response(
            (
                StatusCode::CREATED,
                Json(json!({
                    "id": user.id,
                    "username": user.username,
                    "role": user.role
                })),
            ),
            Ok(()),
        ),
        Err(err) => to_response(
            (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "Username already exists"
                })),
            ),
            Err(ApiError::DbError(err.to_string())),
        ),
    }
}

async fn login(
    Extension(db): Extension<Arc<DatabaseConnection>>,
    Json(payload): Json<UserLogin>,
) -> Response {
    let result = users::find_by_username(&*db, &payload.username).await;

    match result {
        Ok(Some(model)) => match model.check_hash(&payload.password) {
            Ok(()) => match generate_token(&model.id, model.role) {
                Ok(token) => to_response(
                    (
                        StatusCode::OK,
                        Json(json!({
                            "token": token,
                            "id": model.id,
                            "username": model.username,
                            "is_admin": model.is_admin()
                        })),
                    ),
                    Ok(()),
                ),
                Err(err) => to_response(
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": "Internal server error"
                        })),
                    ),
                    Err(ApiError::TokenGenerationFailed(err.to_string())),
                ),
            },
            Err(_) => to_response(
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Invalid username or password"
                    })),
                ),
                Ok(()),
            ),
        },
        Ok(None) => to_response(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Invalid username or password"
                })),
            ),
            Ok(()),
        ),
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

/// Tokens are stateless; there is nothing to destroy server side. The client
/// drops the token and the session is over.
async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "success": true
        })),
    )
}

async fn current_user(Extension(claims): Extension<Claims>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "user_id": claims.user_id,
            "role": claims.role
        })),
    )
}

// utilities
fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?.to_string();

    Ok(password_hash)
}

// structs
#[derive(Deserialize, Clone, Debug, Validate)]
struct CreateUser {
    #[validate(length(min = 3, max = 64))]
    username: String,
    #[validate(length(min = 8, max = 128))]
    password: String,
}

#[derive(Debug, Deserialize, Clone)]
struct UserLogin {
    username: String,
    password: String,
}

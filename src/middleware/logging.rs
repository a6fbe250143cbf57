use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use tracing::{error, info};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();

    match response.extensions().get::<Result<(), ApiError>>() {
        Some(Ok(())) | None => info!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
        Some(Err(value)) => error!(
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %value.to_string(),
            "Failed to process request"
        ),
    }

    response
}

#[derive(Clone, Debug)]
pub enum ApiError {
    TransactionCreationFailed,
    PasswordHashFailed(String),
    TokenGenerationFailed(String),
    DbError(String),
    ValidationFail(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::TransactionCreationFailed => write!(f, "Failed to create transaction"),
            ApiError::PasswordHashFailed(value) => write!(f, "Failed to hash password: {value}"),
            ApiError::TokenGenerationFailed(value) => {
                write!(f, "Failed to generate token: {value}")
            }
            ApiError::DbError(value) => write!(f, "Database error: {value}"),
            ApiError::ValidationFail(value) => write!(f, "Failed to validate: {value}"),
        }
    }
}

/// Attaches the handler outcome to the response so the logging middleware can
/// tell a handled failure from a success with the same machinery.
pub fn to_response<T: IntoResponse>(response: T, ext: Result<(), ApiError>) -> Response {
    let mut response = response.into_response();

    response.extensions_mut().insert(ext);

    response
}

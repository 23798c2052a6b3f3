/*
 * Responsibility
 * - app-wide AppError definition
 * - IntoResponse impl (HTTP status / JSON error body)
 *
 * Notes
 * - The three Unauthorized messages are an external contract consumed by
 *   existing clients; their wording must not change. Verification failures
 *   deliberately share one message so the response does not reveal whether
 *   a token was malformed, expired or revoked.
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized: No token provided")]
    MissingToken,

    #[error("Unauthorized: Invalid token format")]
    InvalidTokenFormat,

    #[error("Unauthorized: Invalid token")]
    InvalidToken,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingToken | AppError::InvalidTokenFormat | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponseBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

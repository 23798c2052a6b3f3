/*
 * Responsibility
 * - GET / and POST / (placeholder route)
 * - the body shape is consumed by existing clients; do not change it
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Hello World",
            "success": true
        })),
    )
}

/*
 * Responsibility
 * - GET /me: echo the validated identity back to the caller
 * - demonstrates the admitted path through the gate + extractor
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::extractors::AuthCtxExtractor;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "uid": ctx.uid,
            "claims": ctx.claims,
        })),
    )
}

/*
 * Responsibility
 * - URL structure of the API
 * - which range of routes sits behind the bearer gate is decided here
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, hello::hello, me::me};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    // Collaborator routes mount behind the same gate as /me.
    let gated = middleware::auth::apply(Router::new().route("/me", get(me)), state);

    Router::new()
        .route("/", get(hello).post(hello))
        .route("/health", get(health))
        .merge(gated)
}

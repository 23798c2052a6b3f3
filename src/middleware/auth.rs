//! Bearer-token validation gate: header extraction → verification → AuthCtx
//! into request extensions.
//!
//! Per-request flow (linear, no retries):
//! 1. no `Authorization` header          → 401 "Unauthorized: No token provided"
//! 2. header without a `Bearer ` prefix  → 401 "Unauthorized: Invalid token format"
//! 3. strip the 7-char prefix, trim the leading edge of the remainder
//! 4. verifier failure of any kind       → 401 "Unauthorized: Invalid token"
//! 5. success → AuthCtx { uid, claims } into extensions, continue
//!
//! The scheme check is case sensitive (`bearer abc` is a format error) and
//! a header of exactly `"Bearer "` is an empty token: it must reach step 4
//! and fail there, not be treated as a format error.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Apply the gate to every route in `router`.
///
/// Example:
/// ```ignore
/// let gated = middleware::auth::apply(Router::new().route("/me", get(me)), state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so the state is
    // passed explicitly via from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, validate_bearer))
}

async fn validate_bearer(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return Err(AppError::MissingToken);
    };

    // A header value that is not visible ASCII cannot carry the scheme.
    let value = value.to_str().map_err(|_| AppError::InvalidTokenFormat)?;

    let Some(rest) = value.strip_prefix("Bearer ") else {
        return Err(AppError::InvalidTokenFormat);
    };

    // Leading trim only; trailing whitespace stays part of the token
    // (parity with the deployed middleware this replaces).
    let token = rest.trim_start();

    let decoded = match state.verifier.verify(token).await {
        Ok(decoded) => decoded,
        Err(err) => {
            // Log the subtype; the response stays uniform so it does not
            // reveal whether the token was malformed, expired or revoked.
            tracing::warn!(error = %err, "id token verification failed");
            return Err(AppError::InvalidToken);
        }
    };

    // middleware → extractor handoff
    req.extensions_mut()
        .insert(AuthCtx::new(decoded.uid, decoded.claims));

    Ok(next.run(req).await)
}

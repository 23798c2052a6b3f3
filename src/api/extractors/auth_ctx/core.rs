use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::AuthCtx;

/// Hands the AuthCtx to a handler.
///
/// The gate inserts the context into request extensions before the handler
/// runs. A missing context means the route was mounted outside the gate;
/// answer with the standard unauthenticated rejection rather than serving
/// the request without an identity.
pub struct AuthCtxExtractor(pub AuthCtx);

impl FromRequestParts<AppState> for AuthCtxExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthCtx>() {
            Some(ctx) => Ok(Self(ctx.clone())),
            None => Err(AppError::MissingToken),
        }
    }
}

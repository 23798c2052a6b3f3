/*
 * Responsibility
 * - the seam towards the identity provider's client SDK
 * - `has_session` mirrors "is a user signed in right now";
 *   `fresh_token` mirrors the SDK's get-or-refresh token call
 */
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("no active session")]
    NoSession,

    #[error("token refresh failed: {0}")]
    Refresh(String),
}

/// Source of fresh bearer credentials for the signed-in user.
///
/// The concrete implementation belongs to the identity provider
/// integration; tests use doubles.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Whether a local identity session exists. Must not touch the network.
    fn has_session(&self) -> bool;

    /// Fetch a fresh token for the current session. May itself perform a
    /// network round-trip to refresh an expiring credential.
    async fn fresh_token(&self) -> Result<String, TokenError>;
}

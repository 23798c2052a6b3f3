/*
 * Responsibility
 * - the trust-root seam: verifying a raw bearer token into a decoded identity
 * - the trait is what the middleware depends on; production wires in
 *   IdTokenVerifier, tests wire in doubles
 */
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Result of a successful verification.
///
/// - `uid` is the provider subject (`sub` claim)
/// - `claims` is the full decoded claim set, `sub` included
///
/// Lives for the current request only: the gate creates it, attaches it to
/// the request, and nothing caches it across requests.
#[derive(Debug, Clone)]
pub struct DecodedIdToken {
    pub uid: String,
    pub claims: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
}

/// Token verification against the trust root.
///
/// `verify` is async because a real verifier may have to reach the issuer
/// (key rotation, revocation checks). Only the calling request suspends.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<DecodedIdToken, VerifyError>;
}

/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - Clone is cheap (Arc inside)
 *
 * Notes
 * - The verifier is the process-wide trust root: built once in app::run
 *   before the listener starts, read-only afterwards. Holding it as a
 *   trait object keeps the gate testable with doubles.
 */
use std::sync::Arc;

use crate::services::auth::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

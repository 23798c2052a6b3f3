/*
 * Responsibility
 * - the "validated identity" type as seen by handlers
 * - the gate verifies and stores it in request extensions; handlers only
 *   ever receive this type
 *
 * Notes
 * - verification logic is the middleware/services side's responsibility
 * - owned by the current request; never cached or reused across requests
 */

use serde_json::{Map, Value};

/// Context attached to an admitted request.
///
/// - `uid` is the provider subject identifier (`sub`)
/// - `claims` is the full provider-supplied claim set, `sub` included
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub uid: String,
    pub claims: Map<String, Value>,
}

impl AuthCtx {
    pub fn new(uid: String, claims: Map<String, Value>) -> Self {
        Self { uid, claims }
    }
}

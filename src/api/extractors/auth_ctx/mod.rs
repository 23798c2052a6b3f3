/*!
 * Authenticated-request context extractor
 *
 * Responsibility:
 * - hand the validated identity (AuthCtx) to handlers
 * - HTTP / axum wiring lives in core, the plain type in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;

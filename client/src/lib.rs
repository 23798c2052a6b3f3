/*
 * Responsibility
 * - public API of the client library (re-exports)
 *
 * The crate wraps every backend call in one of two helpers: `request`
 * (anonymous) and `authed_request` (fresh bearer credential attached).
 * Both resolve to exactly one outcome and never panic across the boundary.
 */
mod client;
mod token_source;

pub use client::{ApiClient, ClientError, DEFAULT_BASE_URL};
pub use token_source::{TokenError, TokenSource};

// Callers name HTTP methods with reqwest's type.
pub use reqwest::Method;

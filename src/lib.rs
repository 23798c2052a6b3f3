/*
 * Responsibility
 * - crate root for the API (the binary stays a thin shell)
 * - exposing the modules lets integration tests assemble routers
 *   with their own verifier doubles
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

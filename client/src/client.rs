/*
 * Responsibility
 * - building requests against the configured base URL
 * - attaching a fresh bearer credential for authenticated calls
 * - collapsing every failure (no session, refresh error, transport error,
 *   unparseable body) into the `None` sentinel
 *
 * Notes
 * - A completed HTTP response is a success regardless of status code; the
 *   parsed body is handed to the caller as-is. Status-based handling
 *   belongs to the caller.
 */
use std::time::Duration;

use reqwest::{Method, header};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::token_source::TokenSource;

/// Default backend endpoint when `API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the backend API.
///
/// Cheap to clone; the inner connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// `timeout` bounds each call end-to-end; without it a hung backend
    /// would hang the caller indefinitely.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.clone()))?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL from the `API_URL` environment variable, falling back to
    /// the local development default.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Unauthenticated call: `<base>/<handler>` with no Authorization header.
    ///
    /// Returns the parsed response body, or `None` on transport failure or
    /// a body that is not JSON.
    pub async fn request(&self, handler: &str, method: Method, body: Option<&Value>) -> Option<Value> {
        self.send(handler, method, body, None).await
    }

    /// Authenticated call: fetch a fresh credential from `source`, attach
    /// it as `Bearer <token>`, then send.
    ///
    /// With no active session the sentinel comes back immediately and no
    /// network call is made.
    pub async fn authed_request(
        &self,
        source: &dyn TokenSource,
        handler: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Option<Value> {
        if !source.has_session() {
            return None;
        }

        let token = match source.fresh_token().await {
            Ok(token) => token,
            Err(err) => {
                tracing::debug!(error = %err, "credential retrieval failed");
                return None;
            }
        };

        self.send(handler, method, body, Some(&token)).await
    }

    fn endpoint(&self, handler: &str) -> String {
        // Exactly one separating slash, whatever the configured base ends with.
        format!("{}/{}", self.base_url.trim_end_matches('/'), handler)
    }

    async fn send(
        &self,
        handler: &str,
        method: Method,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Option<Value> {
        let mut request = self.http.request(method, self.endpoint(handler));

        // JSON content type only when there is a body to describe.
        if let Some(body) = body {
            request = request.json(body);
        }

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "transport error");
                return None;
            }
        };

        response.json::<Value>().await.ok()
    }
}

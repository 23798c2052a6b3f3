//! End-to-end behavior of the bearer validation gate, exercised through a
//! real router with a verifier double.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use tower::ServiceExt;

use hello_api::api;
use hello_api::services::auth::{DecodedIdToken, TokenVerifier, VerifyError};
use hello_api::state::AppState;

const GOOD_TOKEN: &str = "good-token";
const UID: &str = "user-1";

/// Admits exactly one token and records every raw token it is handed.
struct StaticVerifier {
    seen: Mutex<Vec<String>>,
}

impl StaticVerifier {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<DecodedIdToken, VerifyError> {
        self.seen.lock().unwrap().push(token.to_string());

        if token == GOOD_TOKEN {
            let mut claims = Map::new();
            claims.insert("sub".to_string(), Value::String(UID.to_string()));
            claims.insert("email".to_string(), json!("a@example.com"));
            Ok(DecodedIdToken {
                uid: UID.to_string(),
                claims,
            })
        } else {
            Err(VerifyError::Jwt(
                jsonwebtoken::errors::ErrorKind::InvalidToken.into(),
            ))
        }
    }
}

fn app(verifier: Arc<StaticVerifier>) -> Router {
    let state = AppState::new(verifier);
    api::routes(state.clone()).with_state(state)
}

async fn get_me(app: Router, auth: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri("/me");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn missing_header_is_rejected_with_exact_message() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier.clone()), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: No token provided"}));
    // The verifier is never consulted.
    assert!(verifier.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_bearer_scheme_is_a_format_error() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier.clone()), Some("Token abc")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token format"}));
    assert!(verifier.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn scheme_check_is_case_sensitive() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier), Some("bearer abc")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token format"}));
}

#[tokio::test]
async fn missing_space_after_scheme_is_a_format_error() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier), Some("Bearer")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token format"}));
}

#[tokio::test]
async fn failed_verification_gets_the_uniform_message() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier), Some("Bearer expired-or-bad")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token"}));
}

#[tokio::test]
async fn bare_bearer_prefix_reaches_the_verifier_as_empty_token() {
    // "Bearer " with nothing after it is an empty token, not a format
    // error: it must fail at the verification stage.
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier.clone()), Some("Bearer ")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token"}));
    assert_eq!(*verifier.seen.lock().unwrap(), vec![String::new()]);
}

#[tokio::test]
async fn valid_token_is_admitted_with_subject_attached() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier), Some("Bearer good-token")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uid"], UID);
    assert_eq!(body["claims"]["sub"], UID);
    assert_eq!(body["claims"]["email"], "a@example.com");
}

#[tokio::test]
async fn extra_leading_whitespace_is_trimmed_before_verification() {
    let verifier = Arc::new(StaticVerifier::new());
    let (status, _) = get_me(app(verifier.clone()), Some("Bearer    good-token")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(*verifier.seen.lock().unwrap(), vec![GOOD_TOKEN.to_string()]);
}

#[tokio::test]
async fn trailing_whitespace_stays_part_of_the_token() {
    // Deliberate asymmetry: only the leading edge is trimmed, so a trailing
    // space makes the token fail verification.
    let verifier = Arc::new(StaticVerifier::new());
    let (status, body) = get_me(app(verifier.clone()), Some("Bearer good-token ")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"message": "Unauthorized: Invalid token"}));
    assert_eq!(
        *verifier.seen.lock().unwrap(),
        vec![format!("{GOOD_TOKEN} ")]
    );
}

#[tokio::test]
async fn same_token_admits_repeatedly() {
    // No single-use consumption: the gate holds no per-token state.
    let verifier = Arc::new(StaticVerifier::new());
    let app = app(verifier);

    for _ in 0..2 {
        let (status, body) = get_me(app.clone(), Some("Bearer good-token")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["uid"], UID);
    }
}

#[tokio::test]
async fn public_routes_bypass_the_gate() {
    let verifier = Arc::new(StaticVerifier::new());
    let app = app(verifier.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(verifier.seen.lock().unwrap().is_empty());
}

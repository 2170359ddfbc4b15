// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! HTTP API for on-demand translation.
//!
//! This path does not touch the event pipeline: it is a plain synchronous
//! request/response call reusing the translation service. Callers must
//! present a bearer token, validated against the auth service. A failed
//! downstream translation is not an error status; the response simply
//! carries an empty `translated_text`.

use crate::application::translation::TranslationService;
use crate::domain::auth::TokenValidator;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::debug;

pub struct AppState {
    pub translation: Arc<TranslationService>,
    pub validator: Arc<dyn TokenValidator>,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/translate", post(translate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Translation Service is running" }))
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    text: String,
}

async fn translate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<TranslateRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(detail) => return unauthorized(detail),
    };

    if let Err(e) = state.validator.validate(token).await {
        debug!(error = %e, "token validation failed");
        return unauthorized("Invalid or expired token");
    }

    let outcome = state.translation.translate_outcome(&payload.text).await;
    Json(outcome).into_response()
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or("Authorization header missing")?;
    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or("Invalid authorization format")
}

fn unauthorized(detail: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AuthError;
    use crate::domain::generation::{GenerationError, GenerationProvider};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::util::ServiceExt;

    struct CountingProvider {
        calls: AtomicUsize,
        response: Option<String>,
    }

    #[async_trait]
    impl GenerationProvider for CountingProvider {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Some(text) => Ok(text.clone()),
                None => Err(GenerationError::Provider("unavailable".into())),
            }
        }
    }

    struct FixedValidator {
        accept: bool,
    }

    #[async_trait]
    impl TokenValidator for FixedValidator {
        async fn validate(&self, _token: &str) -> Result<(), AuthError> {
            if self.accept {
                Ok(())
            } else {
                Err(AuthError::Rejected { status: 401 })
            }
        }
    }

    fn test_app(
        response: Option<&str>,
        accept_token: bool,
    ) -> (Router, Arc<CountingProvider>) {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
            response: response.map(String::from),
        });
        let state = Arc::new(AppState {
            translation: Arc::new(TranslationService::new(provider.clone(), "Spanish")),
            validator: Arc::new(FixedValidator {
                accept: accept_token,
            }),
        });
        (app(state), provider)
    }

    fn translate_request(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/translate")
            .header("content-type", "application/json");
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        builder
            .body(Body::from(r#"{"text": "Hello"}"#))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_reports_service_running() {
        let (app, _) = test_app(Some("Hola"), true);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Translation Service is running");
    }

    #[tokio::test]
    async fn translate_returns_outcome_for_valid_token() {
        let (app, _) = test_app(Some("Hola"), true);

        let response = app
            .oneshot(translate_request(Some("Bearer user-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["original_text"], "Hello");
        assert_eq!(body["translated_text"], "Hola");
    }

    #[tokio::test]
    async fn missing_header_is_401_with_no_downstream_call() {
        let (app, provider) = test_app(Some("Hola"), true);

        let response = app.oneshot(translate_request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Authorization header missing");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_bearer_header_is_401() {
        let (app, provider) = test_app(Some("Hola"), true);

        let response = app
            .oneshot(translate_request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Invalid authorization format");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn rejected_token_is_401_with_no_downstream_call() {
        let (app, provider) = test_app(Some("Hola"), false);

        let response = app
            .oneshot(translate_request(Some("Bearer stale-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Invalid or expired token");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn downstream_failure_yields_empty_translation_not_error() {
        let (app, _) = test_app(None, true);

        let response = app
            .oneshot(translate_request(Some("Bearer user-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["original_text"], "Hello");
        assert_eq!(body["translated_text"], "");
    }
}

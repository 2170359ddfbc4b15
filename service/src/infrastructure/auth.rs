// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Auth service client.
//!
//! One client covers both auth interactions: signing in with the fixed
//! service account to obtain the write-back credential, and validating
//! caller tokens for the on-demand endpoint. The service account acts on
//! behalf of the system for every write-back, regardless of which user
//! created the document.

use crate::domain::auth::{AdminCredential, AuthError, CredentialBroker, TokenValidator};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const SERVICE_ACCOUNT_USERNAME: &str = "admin";
const SERVICE_ACCOUNT_PASSWORD: &str = "admin";

pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SigninResponse {
    token: String,
}

impl AuthClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CredentialBroker for AuthClient {
    async fn obtain_admin_credential(&self) -> Result<AdminCredential, AuthError> {
        let response = self
            .client
            .post(self.url("/api/auth/signin"))
            .json(&json!({
                "username": SERVICE_ACCOUNT_USERNAME,
                "password": SERVICE_ACCOUNT_PASSWORD,
            }))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Rejected {
                status: response.status().as_u16(),
            });
        }

        let signin: SigninResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;

        Ok(AdminCredential {
            token: signin.token,
        })
    }
}

#[async_trait]
impl TokenValidator for AuthClient {
    async fn validate(&self, token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .get(self.url("/api/auth/validate-token"))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected {
                status: response.status().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signin_returns_issued_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/signin")
            .match_body(mockito::Matcher::Json(
                json!({"username": "admin", "password": "admin"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": "issued-token"}"#)
            .create_async()
            .await;

        let client = AuthClient::new(reqwest::Client::new(), server.url());
        let credential = client.obtain_admin_credential().await.unwrap();

        assert_eq!(credential.token, "issued-token");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn signin_rejection_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/signin")
            .with_status(401)
            .create_async()
            .await;

        let client = AuthClient::new(reqwest::Client::new(), server.url());
        let err = client.obtain_admin_credential().await.unwrap_err();

        assert!(matches!(err, AuthError::Rejected { status: 401 }));
    }

    #[tokio::test]
    async fn validate_passes_bearer_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/auth/validate-token")
            .match_header("authorization", "Bearer user-token")
            .with_status(200)
            .create_async()
            .await;

        let client = AuthClient::new(reqwest::Client::new(), server.url());
        client.validate("user-token").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn validate_rejects_expired_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/auth/validate-token")
            .with_status(401)
            .create_async()
            .await;

        let client = AuthClient::new(reqwest::Client::new(), server.url());
        let err = client.validate("stale").await.unwrap_err();

        assert!(matches!(err, AuthError::Rejected { status: 401 }));
    }
}

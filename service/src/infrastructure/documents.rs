// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Document service client for the translated-title write-back.

use crate::domain::auth::AdminCredential;
use crate::domain::document::{DocumentError, DocumentStore};
use async_trait::async_trait;
use serde_json::json;

pub struct DocumentStoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl DocumentStoreClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DocumentStore for DocumentStoreClient {
    async fn apply_translated_title(
        &self,
        document_id: i64,
        translated_title: &str,
        credential: &AdminCredential,
    ) -> Result<(), DocumentError> {
        let url = format!(
            "{}/api/documents/{}/translated-title",
            self.base_url.trim_end_matches('/'),
            document_id
        );

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", credential.token))
            .json(&json!({ "translatedTitle": translated_title }))
            .send()
            .await
            .map_err(|e| DocumentError::Network(e.to_string()))?;

        // Only the status code matters; the body is not consumed.
        if response.status().is_success() {
            Ok(())
        } else {
            Err(DocumentError::Rejected {
                status: response.status().as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> AdminCredential {
        AdminCredential {
            token: "admin-token".into(),
        }
    }

    #[tokio::test]
    async fn patches_translated_title_with_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/documents/42/translated-title")
            .match_header("authorization", "Bearer admin-token")
            .match_body(mockito::Matcher::Json(json!({"translatedTitle": "Factura"})))
            .with_status(200)
            .create_async()
            .await;

        let client = DocumentStoreClient::new(reqwest::Client::new(), server.url());
        client
            .apply_translated_title(42, "Factura", &credential())
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_rejection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PATCH", "/api/documents/42/translated-title")
            .with_status(404)
            .create_async()
            .await;

        let client = DocumentStoreClient::new(reqwest::Client::new(), server.url());
        let err = client
            .apply_translated_title(42, "Factura", &credential())
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::Rejected { status: 404 }));
    }
}

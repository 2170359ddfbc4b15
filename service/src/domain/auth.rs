// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Auth service interfaces: admin credential issuance and token validation.

use async_trait::async_trait;

/// A short-lived privileged credential for internal write-backs.
///
/// Fetched fresh for every update attempt and never cached; each worker
/// re-authenticates independently.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub token: String,
}

/// Obtains the service-account credential used for document write-backs.
///
/// The credential belongs to a fixed service identity, not to the user who
/// created the document.
#[async_trait]
pub trait CredentialBroker: Send + Sync {
    async fn obtain_admin_credential(&self) -> Result<AdminCredential, AuthError>;
}

/// Validates a caller-supplied bearer token for the on-demand endpoint.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, token: &str) -> Result<(), AuthError>;
}

/// Errors from the identity service. Not retried internally.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("network error: {0}")]
    Network(String),

    #[error("auth service rejected the request (HTTP {status})")]
    Rejected { status: u16 },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Document store interface for the translated-title write-back.

use crate::domain::auth::AdminCredential;
use async_trait::async_trait;

/// Partial-update client for the external document store.
///
/// The update is a pure overwrite of one field, so a duplicate call with the
/// same payload is idempotent. There is no conflict detection: when the
/// stream redelivers an event, the last completed update wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Set the translated title of one document, authenticating with the
    /// given credential. Only the status code of the response is observed.
    async fn apply_translated_title(
        &self,
        document_id: i64,
        translated_title: &str,
        credential: &AdminCredential,
    ) -> Result<(), DocumentError>;
}

/// Errors from the document store. Terminal at the worker level.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("document store rejected the update (HTTP {status})")]
    Rejected { status: u16 },
}

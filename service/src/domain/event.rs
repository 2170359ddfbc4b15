// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Document-created event consumed from the Kafka topic.
//!
//! The producer (document service) publishes JSON messages of the form
//! `{"documentId": 42, "title": "Invoice"}`. Messages missing either field
//! are discarded by the consumer loop rather than retried.

use serde::Deserialize;

/// A `document-created` notification from the event stream.
///
/// Immutable once decoded. Identity is the message's offset in the topic;
/// redelivery of the same offset produces an equal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCreatedEvent {
    pub document_id: i64,
    pub title: String,
}

/// Raw wire shape. Both fields are optional so that an incomplete message
/// decodes cleanly and can be rejected explicitly instead of erroring.
#[derive(Debug, Deserialize)]
struct RawDocumentCreated {
    #[serde(rename = "documentId")]
    document_id: Option<i64>,
    title: Option<String>,
}

impl DocumentCreatedEvent {
    /// Decode a raw message payload.
    ///
    /// Returns `None` when the payload is not JSON or when `documentId` or
    /// `title` is absent or null. Callers log and drop such messages.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let raw: RawDocumentCreated = serde_json::from_slice(payload).ok()?;
        match (raw.document_id, raw.title) {
            (Some(document_id), Some(title)) => Some(Self { document_id, title }),
            _ => None,
        }
    }
}

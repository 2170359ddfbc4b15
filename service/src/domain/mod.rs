// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Domain layer: event types and the trait seams the pipeline is built on.
//!
//! Infrastructure adapters implement these traits; the application layer
//! only ever sees the traits, never a concrete HTTP or Kafka client.

pub mod auth;
pub mod document;
pub mod event;
pub mod generation;
pub mod stream;

pub use auth::{AdminCredential, AuthError, CredentialBroker, TokenValidator};
pub use document::{DocumentError, DocumentStore};
pub use event::DocumentCreatedEvent;
pub use generation::{GenerationError, GenerationProvider};
pub use stream::{EventSource, EventStream, StreamError};

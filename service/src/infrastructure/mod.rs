// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Infrastructure layer: HTTP adapters, the Kafka event source, and the
//! supervised consumer loop.

pub mod auth;
pub mod consumer;
pub mod documents;
pub mod gemini;
pub mod kafka;

pub use auth::AuthClient;
pub use consumer::EventConsumerLoop;
pub use documents::DocumentStoreClient;
pub use gemini::GeminiProvider;
pub use kafka::KafkaEventSource;

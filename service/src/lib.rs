// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! # Translation Service
//!
//! Event-driven translation service for the document management platform.
//!
//! The service has two faces:
//!
//! - A background pipeline that consumes `document-created` events from
//!   Kafka, translates each document title through the Gemini API, and
//!   writes the result back into the document service.
//! - A small HTTP surface with an on-demand `POST /api/translate` endpoint
//!   guarded by bearer-token validation against the auth service.
//!
//! ## Architecture
//!
//! ```text
//! Kafka topic ──> EventConsumerLoop ──> WorkerPool ──> TranslationWorker
//!                                                        │
//!                                   GeminiProvider <─────┤
//!                                   AuthClient     <─────┤ (admin signin)
//!                                   DocumentStoreClient <┘ (PATCH write-back)
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use config::ServiceConfig;

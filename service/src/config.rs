// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Service configuration.
//!
//! Built once at startup from CLI flags and environment variables, then
//! passed down explicitly; no component reads the environment on its own.

use std::time::Duration;

/// Runtime configuration for the translation service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP bind host.
    pub host: String,
    /// HTTP bind port.
    pub port: u16,

    /// Kafka bootstrap servers.
    pub kafka_brokers: String,
    /// Topic carrying document-created events.
    pub kafka_topic: String,
    /// Consumer group id owned by this service.
    pub kafka_group_id: String,

    /// Base URL of the auth service.
    pub auth_service_url: String,
    /// Base URL of the document service.
    pub document_service_url: String,

    /// Gemini API endpoint.
    pub gemini_endpoint: String,
    /// Gemini API key.
    pub gemini_api_key: String,
    /// Gemini model name.
    pub gemini_model: String,

    /// Fixed target language for all translations.
    pub target_language: String,

    /// Number of concurrent translation workers.
    pub worker_pool_size: usize,
    /// Capacity of the queue feeding the worker pool.
    pub queue_capacity: usize,
    /// Fixed delay before resubscribing after a stream failure.
    pub resubscribe_delay: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            kafka_brokers: "localhost:9092".into(),
            kafka_topic: "document-created".into(),
            kafka_group_id: "translation-service".into(),
            auth_service_url: "http://localhost:8081".into(),
            document_service_url: "http://localhost:8082".into(),
            gemini_endpoint: "https://generativelanguage.googleapis.com".into(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-pro".into(),
            target_language: "Spanish".into(),
            worker_pool_size: 8,
            queue_capacity: 64,
            resubscribe_delay: Duration::from_secs(5),
        }
    }
}

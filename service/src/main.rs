// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0

//! # Translation Service binary
//!
//! Startup wiring: configuration, logging, the shared HTTP client, the
//! worker pool, the detached Kafka consumer loop, and the axum server.
//!
//! The consumer loop is spawned once and never joined; it lives as long as
//! the process does. Shutdown is abrupt by design: in-flight workers are
//! abandoned with no drain, matching the pipeline's best-effort semantics.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use translation_service::application::{TranslationService, TranslationWorker, WorkerPool};
use translation_service::infrastructure::{
    AuthClient, DocumentStoreClient, EventConsumerLoop, GeminiProvider, KafkaEventSource,
};
use translation_service::presentation::{app, AppState};
use translation_service::ServiceConfig;

/// DMS translation service - event-driven document title translation
#[derive(Parser)]
#[command(name = "translation-service")]
#[command(version, about, long_about = None)]
struct Cli {
    /// HTTP API host
    #[arg(long, env = "TRANSLATION_HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(long, env = "TRANSLATION_PORT", default_value = "8000")]
    port: u16,

    /// Kafka bootstrap servers
    #[arg(long, env = "KAFKA_BOOTSTRAP_SERVERS", default_value = "localhost:9092")]
    kafka_brokers: String,

    /// Topic carrying document-created events
    #[arg(long, env = "KAFKA_TOPIC", default_value = "document-created")]
    kafka_topic: String,

    /// Consumer group id
    #[arg(long, env = "KAFKA_GROUP_ID", default_value = "translation-service")]
    kafka_group_id: String,

    /// Auth service base URL
    #[arg(long, env = "AUTH_SERVICE_URL", default_value = "http://localhost:8081")]
    auth_service_url: String,

    /// Document service base URL
    #[arg(long, env = "DOCUMENT_SERVICE_URL", default_value = "http://localhost:8082")]
    document_service_url: String,

    /// Gemini API endpoint
    #[arg(
        long,
        env = "GEMINI_API_ENDPOINT",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    gemini_endpoint: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, default_value = "")]
    gemini_api_key: String,

    /// Gemini model name
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-pro")]
    gemini_model: String,

    /// Target language for all translations
    #[arg(long, env = "TARGET_LANGUAGE", default_value = "Spanish")]
    target_language: String,

    /// Number of concurrent translation workers
    #[arg(long, env = "WORKER_POOL_SIZE", default_value = "8")]
    workers: usize,

    /// Capacity of the queue feeding the worker pool
    #[arg(long, env = "WORKER_QUEUE_CAPACITY", default_value = "64")]
    queue_capacity: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TRANSLATION_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            host: self.host,
            port: self.port,
            kafka_brokers: self.kafka_brokers,
            kafka_topic: self.kafka_topic,
            kafka_group_id: self.kafka_group_id,
            auth_service_url: self.auth_service_url,
            document_service_url: self.document_service_url,
            gemini_endpoint: self.gemini_endpoint,
            gemini_api_key: self.gemini_api_key,
            gemini_model: self.gemini_model,
            target_language: self.target_language,
            worker_pool_size: self.workers,
            queue_capacity: self.queue_capacity,
            ..ServiceConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    run(cli.into_config()).await
}

async fn run(config: ServiceConfig) -> Result<()> {
    // One shared HTTP client, injected into every adapter.
    let http = reqwest::Client::new();

    let provider = Arc::new(GeminiProvider::new(
        http.clone(),
        config.gemini_endpoint.clone(),
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let translation = Arc::new(TranslationService::new(
        provider,
        config.target_language.clone(),
    ));
    let auth = Arc::new(AuthClient::new(http.clone(), config.auth_service_url.clone()));
    let documents = Arc::new(DocumentStoreClient::new(
        http,
        config.document_service_url.clone(),
    ));

    let worker = Arc::new(TranslationWorker::new(
        translation.clone(),
        auth.clone(),
        documents,
    ));
    let pool = WorkerPool::spawn(worker, config.worker_pool_size, config.queue_capacity);

    let source = Arc::new(KafkaEventSource::new(
        config.kafka_brokers.clone(),
        config.kafka_topic.clone(),
        config.kafka_group_id.clone(),
    ));
    let consumer = EventConsumerLoop::new(source, pool.dispatcher(), config.resubscribe_delay);

    // Fire-and-forget: the pipeline runs for the life of the process.
    tokio::spawn(consumer.run());
    info!(
        topic = %config.kafka_topic,
        group = %config.kafka_group_id,
        "event pipeline started"
    );

    let state = Arc::new(AppState {
        translation,
        validator: auth,
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "translation service listening");

    axum::serve(listener, app(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}

// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Kafka event source.
//!
//! Each `subscribe` call builds a fresh `StreamConsumer` joining the
//! service's consumer group. Offsets are auto-committed on receipt, so an
//! event received but not yet processed when the process dies is not
//! replayed (at-most-once past receipt).

use crate::domain::stream::{EventSource, EventStream, StreamError};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::Message;

pub struct KafkaEventSource {
    brokers: String,
    topic: String,
    group_id: String,
}

impl KafkaEventSource {
    pub fn new(brokers: String, topic: String, group_id: String) -> Self {
        Self {
            brokers,
            topic,
            group_id,
        }
    }

    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("group.id", &self.group_id)
            .set("bootstrap.servers", &self.brokers)
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "earliest");
        config
    }
}

#[async_trait]
impl EventSource for KafkaEventSource {
    async fn subscribe(&self) -> Result<Box<dyn EventStream>, StreamError> {
        let consumer: StreamConsumer = self
            .client_config()
            .create()
            .map_err(|e| StreamError::Subscribe(e.to_string()))?;

        consumer
            .subscribe(&[&self.topic])
            .map_err(|e| StreamError::Subscribe(e.to_string()))?;

        Ok(Box::new(KafkaSubscription { consumer }))
    }
}

struct KafkaSubscription {
    consumer: StreamConsumer,
}

#[async_trait]
impl EventStream for KafkaSubscription {
    async fn next_event(&mut self) -> Result<Vec<u8>, StreamError> {
        let message = self
            .consumer
            .recv()
            .await
            .map_err(|e| StreamError::Receive(e.to_string()))?;

        Ok(message.payload().map(<[u8]>::to_vec).unwrap_or_default())
    }
}

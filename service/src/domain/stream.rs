// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Event stream interface consumed by the supervised consumer loop.
//!
//! A subscription is a disposable handle: when `next_event` fails, the loop
//! drops the handle and asks the source for a fresh one after a fixed delay.

use async_trait::async_trait;

/// A source of raw event payloads (one named topic, one consumer group).
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Open a fresh subscription from scratch.
    async fn subscribe(&self) -> Result<Box<dyn EventStream>, StreamError>;
}

/// An open subscription yielding raw message payloads.
#[async_trait]
pub trait EventStream: Send {
    /// Receive the next message payload.
    ///
    /// An error means the subscription is broken and must be replaced; it
    /// says nothing about individual message contents.
    async fn next_event(&mut self) -> Result<Vec<u8>, StreamError>;
}

/// Stream-level failures. Recovered by resubscribing, never surfaced
/// outside the consumer loop.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("failed to subscribe: {0}")]
    Subscribe(String),

    #[error("failed to receive message: {0}")]
    Receive(String),
}

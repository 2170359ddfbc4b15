// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Supervised event consumer loop.
//!
//! Runs for the life of the process on its own task, separate from the
//! request-serving path. The supervision is a plain outer `loop`: when the
//! subscription breaks for any reason, the loop sleeps a fixed delay and
//! resubscribes from scratch with the same topic and group. Retries are
//! unbounded; a broken broker never escalates to a fatal state.
//!
//! Valid events are handed to the worker queue and the loop moves on
//! without waiting for processing to finish. Malformed messages are logged
//! and dropped, never retried.

use crate::domain::event::DocumentCreatedEvent;
use crate::domain::stream::EventSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct EventConsumerLoop {
    source: Arc<dyn EventSource>,
    dispatcher: mpsc::Sender<DocumentCreatedEvent>,
    retry_delay: Duration,
}

impl EventConsumerLoop {
    pub fn new(
        source: Arc<dyn EventSource>,
        dispatcher: mpsc::Sender<DocumentCreatedEvent>,
        retry_delay: Duration,
    ) -> Self {
        Self {
            source,
            dispatcher,
            retry_delay,
        }
    }

    /// Consume events until the process exits.
    pub async fn run(self) {
        loop {
            match self.source.subscribe().await {
                Ok(mut stream) => {
                    info!("subscribed to event stream");
                    loop {
                        match stream.next_event().await {
                            Ok(payload) => self.dispatch(&payload).await,
                            Err(e) => {
                                warn!(error = %e, "event stream failed");
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to subscribe to event stream");
                }
            }

            tokio::time::sleep(self.retry_delay).await;
        }
    }

    async fn dispatch(&self, payload: &[u8]) {
        match DocumentCreatedEvent::from_payload(payload) {
            Some(event) => {
                debug!(document_id = event.document_id, "queueing document for translation");
                if self.dispatcher.send(event).await.is_err() {
                    warn!("worker queue closed, dropping event");
                }
            }
            None => {
                debug!("discarding malformed document-created message");
            }
        }
    }
}

// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Translation pipeline: per-event worker and the bounded worker pool.
//!
//! One `TranslationWorker::process` call handles one `document-created`
//! event: translate the title, obtain a fresh admin credential, write the
//! translated title back. Every failure is terminal and silent beyond a log
//! line; nothing is retried and nothing is reported to the dispatcher.
//!
//! The pool bounds how many events are processed concurrently. The consumer
//! loop pushes events into a bounded queue and never waits for a worker to
//! finish; it only waits for queue space when the pool is saturated. This
//! replaces the unbounded one-task-per-event fan-out the original design
//! had, which grew without limit under high event volume.

use crate::application::translation::TranslationService;
use crate::domain::auth::CredentialBroker;
use crate::domain::document::DocumentStore;
use crate::domain::event::DocumentCreatedEvent;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Processes one document-created event end to end.
pub struct TranslationWorker {
    translation: Arc<TranslationService>,
    broker: Arc<dyn CredentialBroker>,
    documents: Arc<dyn DocumentStore>,
}

impl TranslationWorker {
    pub fn new(
        translation: Arc<TranslationService>,
        broker: Arc<dyn CredentialBroker>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            translation,
            broker,
            documents,
        }
    }

    /// Run the translate → authenticate → update chain for one event.
    ///
    /// Stops at the first failing step. An empty translation result means
    /// the translation failed; the event is dropped without touching the
    /// auth service or the document store.
    pub async fn process(&self, event: DocumentCreatedEvent) {
        let translated = self.translation.translate(&event.title).await;
        if translated.is_empty() {
            debug!(document_id = event.document_id, "no translation produced, dropping event");
            return;
        }

        let credential = match self.broker.obtain_admin_credential().await {
            Ok(credential) => credential,
            Err(e) => {
                warn!(document_id = event.document_id, error = %e, "failed to obtain admin credential");
                return;
            }
        };

        match self
            .documents
            .apply_translated_title(event.document_id, &translated, &credential)
            .await
        {
            Ok(()) => {
                debug!(document_id = event.document_id, "translated title applied");
            }
            Err(e) => {
                warn!(document_id = event.document_id, error = %e, "failed to update document");
            }
        }
    }
}

/// Bounded pool of translation workers fed by an internal queue.
pub struct WorkerPool {
    sender: mpsc::Sender<DocumentCreatedEvent>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `workers` tasks draining a queue of `queue_capacity` events.
    ///
    /// The pool runs for the life of the process; dropping every dispatcher
    /// handle shuts the workers down once the queue drains.
    pub fn spawn(worker: Arc<TranslationWorker>, workers: usize, queue_capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(queue_capacity);
        let receiver = Arc::new(Mutex::new(receiver));

        let handles = (0..workers)
            .map(|slot| {
                let worker = worker.clone();
                let receiver = receiver.clone();
                tokio::spawn(async move {
                    loop {
                        let event = {
                            let mut receiver = receiver.lock().await;
                            receiver.recv().await
                        };
                        match event {
                            Some(event) => worker.process(event).await,
                            None => break,
                        }
                    }
                    debug!(slot, "translation worker stopped");
                })
            })
            .collect();

        info!(workers, queue_capacity, "translation worker pool started");
        Self { sender, handles }
    }

    /// Queue handle for the consumer loop.
    pub fn dispatcher(&self) -> mpsc::Sender<DocumentCreatedEvent> {
        self.sender.clone()
    }

    /// Number of live worker tasks.
    pub fn size(&self) -> usize {
        self.handles.len()
    }
}

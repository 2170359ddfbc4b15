// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Application layer: translation use case and the event-driven pipeline.

pub mod pipeline;
pub mod translation;

pub use pipeline::{TranslationWorker, WorkerPool};
pub use translation::{TranslationOutcome, TranslationService};

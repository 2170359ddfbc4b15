// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Text generation provider interface (Anti-Corruption Layer).
//!
//! Isolates the translation logic from the concrete Gemini API. The
//! implementation lives in `infrastructure::gemini`.

use async_trait::async_trait;

/// Domain interface for the external text-generation capability.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Run a single free-form prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Errors from the generation capability.
///
/// The pipeline never retries these; the translation service collapses them
/// to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

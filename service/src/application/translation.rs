// Copyright (c) 2026 DMS Team
// SPDX-License-Identifier: AGPL-3.0
//! Translation use case over the generation provider.
//!
//! Builds the fixed translation instruction, issues exactly one provider
//! call, and performs a bare-minimum cleanup of the output. Any provider
//! failure collapses to an empty string: callers treat "empty" as "do not
//! proceed", so no typed error crosses this boundary.

use crate::domain::generation::GenerationProvider;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Result of an on-demand translation. An empty `translated_text` means the
/// translation failed; it is reported to the caller but never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutcome {
    pub original_text: String,
    pub translated_text: String,
}

/// Translates document text into a fixed target language.
pub struct TranslationService {
    provider: Arc<dyn GenerationProvider>,
    target_language: String,
}

impl TranslationService {
    pub fn new(provider: Arc<dyn GenerationProvider>, target_language: impl Into<String>) -> Self {
        Self {
            provider,
            target_language: target_language.into(),
        }
    }

    /// Translate `text`, returning the empty string on any failure.
    ///
    /// No retry and no language detection: one prompt, one call.
    pub async fn translate(&self, text: &str) -> String {
        let prompt = format!(
            "Translate the following English text to {}. Return only the translated \
             text without any additional explanation: '{}'",
            self.target_language, text
        );

        match self.provider.generate(&prompt).await {
            Ok(generated) => strip_surrounding_quotes(generated.trim()).to_string(),
            Err(e) => {
                warn!(error = %e, "translation failed");
                String::new()
            }
        }
    }

    /// Translate `text` and pair the result with the original, for the
    /// on-demand endpoint.
    pub async fn translate_outcome(&self, text: &str) -> TranslationOutcome {
        let translated_text = self.translate(text).await;
        TranslationOutcome {
            original_text: text.to_string(),
            translated_text,
        }
    }
}

/// Strip a single pair of surrounding double quotes, if present.
///
/// The model occasionally echoes the quoting from the prompt; nothing more
/// elaborate is attempted.
fn strip_surrounding_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Scripted provider that records the prompts it receives.
    struct ScriptedProvider {
        response: Result<String, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(GenerationError::Network("connection refused".into())),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationProvider for ScriptedProvider {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(GenerationError::Network("connection refused".into())),
            }
        }
    }

    #[tokio::test]
    async fn prompt_names_target_language_and_text() {
        let provider = Arc::new(ScriptedProvider::ok("Factura"));
        let service = TranslationService::new(provider.clone(), "Spanish");

        service.translate("Invoice").await;

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("to Spanish"));
        assert!(prompts[0].contains("'Invoice'"));
    }

    #[tokio::test]
    async fn strips_one_pair_of_surrounding_quotes() {
        let provider = Arc::new(ScriptedProvider::ok("\"Factura\""));
        let service = TranslationService::new(provider, "Spanish");

        assert_eq!(service.translate("Invoice").await, "Factura");
    }

    #[tokio::test]
    async fn keeps_unpaired_quote() {
        let provider = Arc::new(ScriptedProvider::ok("\"Factura"));
        let service = TranslationService::new(provider, "Spanish");

        assert_eq!(service.translate("Invoice").await, "\"Factura");
    }

    #[tokio::test]
    async fn provider_failure_yields_empty_string() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = TranslationService::new(provider, "Spanish");

        assert_eq!(service.translate("Report").await, "");
    }

    #[tokio::test]
    async fn outcome_carries_original_text() {
        let provider = Arc::new(ScriptedProvider::failing());
        let service = TranslationService::new(provider, "Spanish");

        let outcome = service.translate_outcome("Hello").await;
        assert_eq!(outcome.original_text, "Hello");
        assert_eq!(outcome.translated_text, "");
    }
}

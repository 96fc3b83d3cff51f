//! Relay service: one transcript in, one generated reply out.
//!
//! Stateless per call. The credential is resolved at request time, the
//! transcript is split into history and new message, and exactly one
//! generation call is issued. No retries.

use secrecy::ExposeSecret;
use tracing::{Instrument, debug, error, info, info_span, warn};

use advisor_types::chat::RelayRequest;
use advisor_types::error::RelayError;
use advisor_types::llm::GenerationRequest;

use crate::llm::box_provider::BoxGenerationProvider;
use crate::repository::secret::BoxSecretProvider;

use super::history::{first_alternation_break, split_transcript};
use super::persona::Persona;

/// Fixed per-deployment settings applied to every generation call.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub persona: Persona,
    pub model: String,
    pub max_output_tokens: u32,
    /// Name of the secret holding the generation API key.
    pub credential_key: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens: 1024,
            credential_key: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Forwards a full transcript to the generation provider.
///
/// Holds no mutable state; share it behind an `Arc` across requests.
pub struct RelayService {
    provider: BoxGenerationProvider,
    secrets: BoxSecretProvider,
    settings: RelaySettings,
}

impl RelayService {
    pub fn new(
        provider: BoxGenerationProvider,
        secrets: BoxSecretProvider,
        settings: RelaySettings,
    ) -> Self {
        Self {
            provider,
            secrets,
            settings,
        }
    }

    /// Relay one transcript and return the generated text verbatim.
    ///
    /// Errors:
    /// - [`RelayError::EmptyTranscript`] when `messages` is empty
    /// - [`RelayError::MissingCredential`] when the API key is absent or empty;
    ///   the provider is not called
    /// - [`RelayError::Generation`] for any failure of the generation call
    pub async fn relay(&self, request: &RelayRequest) -> Result<String, RelayError> {
        let (history, message) = split_transcript(&request.messages)?;

        let key = &self.settings.credential_key;
        let credential = self
            .secrets
            .get(key)
            .await?
            .filter(|secret| !secret.expose_secret().is_empty())
            .ok_or_else(|| {
                warn!(key = %key, "credential not configured; skipping generation call");
                RelayError::MissingCredential(key.clone())
            })?;

        if let Some(index) = first_alternation_break(&history) {
            debug!(index, "history does not alternate roles; passing through");
        }

        let generation = GenerationRequest {
            model: self.settings.model.clone(),
            system_instruction: Some(self.settings.persona.instruction().to_string()),
            history,
            message: message.to_string(),
            max_output_tokens: self.settings.max_output_tokens,
        };

        let span = info_span!(
            "gen_ai.chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %generation.model,
            gen_ai.request.max_tokens = generation.max_output_tokens,
            history_len = generation.history.len(),
        );

        match self
            .provider
            .generate(&credential, &generation)
            .instrument(span)
            .await
        {
            Ok(response) => {
                info!(
                    output_tokens = response.usage.output_tokens,
                    finish_reason = ?response.finish_reason,
                    "generation completed"
                );
                Ok(response.text)
            }
            Err(e) => {
                error!(error = %e, "generation failed");
                Err(RelayError::Generation(e))
            }
        }
    }
}

//! Application state wiring the relay together.
//!
//! AppState pins the relay to the concrete infra implementations: the
//! Gemini provider and the environment secret provider.

use std::sync::Arc;

use advisor_core::relay::{Persona, RelayService, RelaySettings};
use advisor_core::repository::secret::BoxSecretProvider;
use advisor_infra::llm::create_provider;
use advisor_infra::secret::EnvSecretProvider;
use advisor_types::config::AdvisorConfig;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub config: Arc<AdvisorConfig>,
}

impl AppState {
    /// Build the production relay from configuration.
    ///
    /// The credential is not checked here; the relay looks it up on every
    /// request so a missing key surfaces as a 500 rather than a startup
    /// failure.
    pub fn init(config: AdvisorConfig) -> anyhow::Result<Self> {
        let provider = create_provider(&config)?;
        let secrets = BoxSecretProvider::new(EnvSecretProvider::new());
        let settings = RelaySettings {
            persona: Persona::ogun_startup_advisor(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            credential_key: config.api_key_env.clone(),
        };

        Ok(Self::new(RelayService::new(provider, secrets, settings), config))
    }

    pub fn new(relay: RelayService, config: AdvisorConfig) -> Self {
        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }
}

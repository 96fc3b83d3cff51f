//! Generation provider implementations.
//!
//! Contains the concrete implementation of the [`GenerationProvider`]
//! trait defined in `advisor-core`, and a factory that builds it from
//! configuration.
//!
//! [`GenerationProvider`]: advisor_core::llm::provider::GenerationProvider

pub mod gemini;

use std::time::Duration;

use advisor_core::llm::box_provider::BoxGenerationProvider;
use advisor_types::config::AdvisorConfig;
use advisor_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create the configured [`BoxGenerationProvider`].
pub fn create_provider(config: &AdvisorConfig) -> Result<BoxGenerationProvider, LlmError> {
    let provider = GeminiProvider::new(Duration::from_secs(config.request_timeout_secs))?
        .with_base_url(config.base_url.clone());
    Ok(BoxGenerationProvider::new(provider))
}

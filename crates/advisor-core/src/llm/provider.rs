//! GenerationProvider trait definition.
//!
//! This is the core abstraction that the external generation backend
//! implements. Uses RPITIT for `generate`.

use secrecy::SecretString;

use advisor_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for generation API backends (Gemini, test stubs).
///
/// The credential is passed per call because the relay resolves it at
/// request time; a provider never caches it.
///
/// Implementations live in advisor-infra (e.g., `GeminiProvider`).
pub trait GenerationProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one generation request and receive the full generated text.
    fn generate(
        &self,
        credential: &SecretString,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}

//! Environment variable secret provider.
//!
//! Reads the key directly as an environment variable name (e.g.,
//! "GEMINI_API_KEY"). Values from a `.env` file are visible here once
//! `dotenvy` has loaded them at startup.

use secrecy::SecretString;

use advisor_core::repository::secret::SecretProvider;
use advisor_types::error::SecretError;

/// Environment variable secret provider.
///
/// Looked up on every call, so a key exported after startup is picked up
/// by the next request.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    async fn get(&self, key: &str) -> Result<Option<SecretString>, SecretError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(SecretString::from(val))),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(SecretError::InvalidValue(key.to_string())),
        }
    }
}

use thiserror::Error;

use crate::llm::LlmError;

/// Errors from a single relay call.
///
/// Only two classes reach the caller as server failures: configuration
/// (missing credential) and everything the generation call surfaces.
/// An empty transcript is rejected before either.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("messages must contain at least one entry")]
    EmptyTranscript,

    #[error("{0} not configured")]
    MissingCredential(String),

    #[error("secret lookup failed: {0}")]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Generation(#[from] LlmError),
}

/// Errors related to secret lookups.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret '{0}' is not valid unicode")]
    InvalidValue(String),
}

/// Errors from the client-side relay transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_the_key() {
        let err = RelayError::MissingCredential("GEMINI_API_KEY".to_string());
        assert_eq!(err.to_string(), "GEMINI_API_KEY not configured");
    }

    #[test]
    fn test_generation_error_is_transparent() {
        let err = RelayError::from(LlmError::RateLimited("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "rate limited: quota exceeded");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "config.toml".to_string(),
            message: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("config.toml"));
    }
}

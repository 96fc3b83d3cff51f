//! Configuration types for the Ogun Startup Advisor.
//!
//! `AdvisorConfig` represents the optional `config.toml` that controls where
//! the relay listens, which model it calls, and where the credential lives.

use serde::{Deserialize, Serialize};

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Top-level configuration. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Generation model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Output-length cap applied to every generation call.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Override the generation API base URL (proxies, tests).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding the browser chat UI.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,

    /// HTTP client timeout for generation calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_web_dir() -> String {
    "public".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            web_dir: default_web_dir(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

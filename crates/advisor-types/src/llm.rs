//! Generation request/response types for the Ogun Startup Advisor.
//!
//! These types model the data handed to and received from the external
//! generation API: prior history as role-tagged contents, the new outgoing
//! message, and the generated text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a content entry as the generation API understands it.
///
/// The external API only knows two speakers: the human (`user`) and the
/// model (`model`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

impl ContentRole {
    /// Map a free-form relay role onto the generation API's roles.
    ///
    /// Only the exact string `"user"` maps to [`ContentRole::User`]. Every
    /// other value (`"assistant"`, `"system"`, anything else) becomes
    /// [`ContentRole::Model`]. This is a permissive fallback, not validation.
    pub fn from_relay_role(role: &str) -> Self {
        if role == "user" {
            ContentRole::User
        } else {
            ContentRole::Model
        }
    }
}

impl fmt::Display for ContentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentRole::User => write!(f, "user"),
            ContentRole::Model => write!(f, "model"),
        }
    }
}

/// A single text part of a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One turn of prior context in the generation API's history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: ContentRole,
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a single-part text content.
    pub fn text(role: ContentRole, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A single generation call: history, the new message, and fixed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    /// Persona instruction sent with every call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    /// Prior turns, oldest first.
    pub history: Vec<Content>,
    /// The new user input.
    pub message: String,
    pub max_output_tokens: u32,
}

/// Result of a successful generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub usage: Usage,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from generation provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    /// Non-success status from the provider; the message is the provider's own.
    #[error("{message} (HTTP {status})")]
    Upstream { status: u16, message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("response blocked or empty: {0}")]
    EmptyResponse(String),
}

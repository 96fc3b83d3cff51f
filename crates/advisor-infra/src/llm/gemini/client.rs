//! GeminiProvider -- concrete [`GenerationProvider`] for Google Gemini.
//!
//! Sends one `models/{model}:generateContent` request per call. Prior
//! history goes into `contents`, followed by the new user message; the
//! persona travels as `systemInstruction`.
//!
//! The API key arrives as a [`SecretString`] and is only exposed when
//! building the request header.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use advisor_core::llm::provider::GenerationProvider;
use advisor_types::config::DEFAULT_GEMINI_BASE_URL;
use advisor_types::llm::{
    Content, ContentRole, GenerationRequest, GenerationResponse, LlmError, Part, Usage,
};

use super::types::{
    GeminiErrorEnvelope, GeminiGenerationConfig, GeminiRequest, GeminiResponse,
    GeminiSystemInstruction,
};

/// Google Gemini generation provider.
///
/// Holds no credential of its own; the relay hands one in per call.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider whose HTTP client gives up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`GenerationRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &GenerationRequest) -> GeminiRequest {
        let mut contents = request.history.clone();
        contents.push(Content::text(ContentRole::User, request.message.clone()));

        GeminiRequest {
            system_instruction: request.system_instruction.as_ref().map(|text| {
                GeminiSystemInstruction {
                    parts: vec![Part { text: text.clone() }],
                }
            }),
            contents,
            generation_config: GeminiGenerationConfig {
                max_output_tokens: request.max_output_tokens,
            },
        }
    }
}

/// Map a non-success HTTP status and body onto an [`LlmError`].
///
/// Uses the API's own error message when the body is a Gemini error envelope.
fn error_from_status(status: StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        400 => LlmError::InvalidRequest(message),
        401 | 403 => LlmError::AuthenticationFailed(message),
        429 => LlmError::RateLimited(message),
        code => LlmError::Upstream {
            status: code,
            message,
        },
    }
}

/// Pull the generated text out of the first candidate.
fn into_generation_response(
    response: GeminiResponse,
    requested_model: &str,
) -> Result<GenerationResponse, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(LlmError::EmptyResponse(reason));
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "no text in candidate".to_string());
        return Err(LlmError::EmptyResponse(reason));
    }

    let usage = response.usage_metadata.unwrap_or_default();

    Ok(GenerationResponse {
        text,
        model: response
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason: candidate.finish_reason,
        usage: Usage {
            input_tokens: usage.prompt_token_count,
            output_tokens: usage.candidates_token_count,
        },
    })
}

impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        credential: &SecretString,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &error_body));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        into_generation_response(gemini_resp, &request.model)
    }
}

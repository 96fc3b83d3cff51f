//! HTTP implementation of [`RelayTransport`] used by the terminal chat.
//!
//! Posts the transcript to `{base_url}/api/chat` and decodes either
//! `{"text"}` or `{"error"}` regardless of the status code, since the relay
//! uses the body to carry the failure message.

use std::time::Duration;

use advisor_core::chat::transport::RelayTransport;
use advisor_types::chat::{RelayRequest, RelayResponse};
use advisor_types::error::TransportError;

pub struct HttpRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelayClient {
    /// Create a client for the relay at `base_url` (e.g., `http://127.0.0.1:3000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RelayTransport for HttpRelayClient {
    async fn send(&self, request: &RelayRequest) -> Result<RelayResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        serde_json::from_slice::<RelayResponse>(&body).map_err(|e| {
            tracing::debug!(%status, "relay body did not decode");
            TransportError::InvalidBody(e.to_string())
        })
    }
}

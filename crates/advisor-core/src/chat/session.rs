//! A single client chat session.
//!
//! Owns the transcript and drives one exchange per `send`: append the user
//! turn, ship the whole transcript, append exactly one assistant turn.
//! `send` takes `&mut self`, so a session never has two requests in flight.

use tracing::{debug, warn};

use advisor_types::chat::{RelayResponse, TurnRole};

use super::transcript::Transcript;
use super::transport::RelayTransport;

/// Greeting shown as the first (display-only) turn.
pub const WELCOME_MESSAGE: &str = "🤝 Welcome to Ogun Startup Advisor! I'm here to help you think through your business ideas, validate concepts, and grow your entrepreneurial journey. What's on your mind today?";

/// Appended when the relay answers without text.
pub const SERVICE_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Appended when the relay could not be reached or answered garbage.
pub const CONNECTION_ERROR_REPLY: &str =
    "Sorry, there was an error connecting to the service. Please check your connection and try again.";

/// How a send settled. An assistant turn has been appended in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The relay returned generated text.
    Replied,
    /// The relay returned an error body.
    ServiceFailed(String),
    /// The request never produced a decodable response.
    Unreachable(String),
}

pub struct ChatSession<T: RelayTransport> {
    transport: T,
    transcript: Transcript,
}

impl<T: RelayTransport> ChatSession<T> {
    /// Start a session with the standard welcome turn.
    pub fn new(transport: T) -> Self {
        Self::with_transcript(transport, Transcript::with_welcome(WELCOME_MESSAGE))
    }

    pub fn with_transcript(transport: T, transcript: Transcript) -> Self {
        Self {
            transport,
            transcript,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send one user message.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user turn is
    /// appended, the full transcript is relayed once, and one assistant turn
    /// (the reply or a fixed fallback) is appended.
    pub async fn send(&mut self, input: &str) -> Option<SendOutcome> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.append_text(TurnRole::User, input);
        let payload = self.transcript.to_payload();
        debug!(messages = payload.messages.len(), "sending transcript");

        let (text, outcome) = match self.transport.send(&payload).await {
            Ok(RelayResponse::Reply(reply)) if !reply.text.is_empty() => {
                (reply.text, SendOutcome::Replied)
            }
            Ok(RelayResponse::Reply(_)) => (
                SERVICE_ERROR_REPLY.to_string(),
                SendOutcome::ServiceFailed("empty reply".to_string()),
            ),
            Ok(RelayResponse::Failure(failure)) => {
                warn!(error = %failure.error, "relay reported an error");
                (
                    SERVICE_ERROR_REPLY.to_string(),
                    SendOutcome::ServiceFailed(failure.error),
                )
            }
            Err(e) => {
                warn!(error = %e, "relay unreachable");
                (
                    CONNECTION_ERROR_REPLY.to_string(),
                    SendOutcome::Unreachable(e.to_string()),
                )
            }
        };

        self.transcript.append_text(TurnRole::Assistant, text);
        Some(outcome)
    }
}

//! Client-side transcript store.
//!
//! An ordered, append-only list of turns for one session. The optional
//! leading welcome turn exists for display only and never reaches the relay.

use advisor_types::chat::{RelayMessage, RelayRequest, Turn, TurnId, TurnRole};

/// Ordered conversation turns for the active session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    welcome: Option<TurnId>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript whose first turn is a synthetic assistant greeting.
    pub fn with_welcome(text: impl Into<String>) -> Self {
        let turn = Turn::new(TurnRole::Assistant, text);
        Self {
            welcome: Some(turn.id),
            turns: vec![turn],
        }
    }

    /// Add a turn at the end. No validation, no size cap.
    pub fn append(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Create and append a turn from a role and text.
    pub fn append_text(&mut self, role: TurnRole, text: impl Into<String>) -> &Turn {
        self.append(Turn::new(role, text))
    }

    /// Build the relay payload: every turn except the welcome, in order.
    pub fn to_payload(&self) -> RelayRequest {
        RelayRequest {
            messages: self
                .turns
                .iter()
                .filter(|turn| Some(turn.id) != self.welcome)
                .map(RelayMessage::from)
                .collect(),
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The synthetic welcome turn, if this transcript has one.
    pub fn welcome(&self) -> Option<&Turn> {
        let id = self.welcome?;
        self.turns.iter().find(|turn| turn.id == id)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

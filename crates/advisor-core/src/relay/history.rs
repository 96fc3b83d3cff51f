//! Transcript to generation-history conversion.
//!
//! A relay request of length n is split into `history = messages[..n-1]`
//! and `message = messages[n-1].content`. History roles are mapped with
//! [`ContentRole::from_relay_role`].

use advisor_types::chat::RelayMessage;
use advisor_types::error::RelayError;
use advisor_types::llm::{Content, ContentRole};

/// Split a transcript into mapped history and the new outgoing message.
///
/// Fails with [`RelayError::EmptyTranscript`] when there is nothing to send.
pub fn split_transcript(messages: &[RelayMessage]) -> Result<(Vec<Content>, &str), RelayError> {
    let (last, prior) = messages.split_last().ok_or(RelayError::EmptyTranscript)?;
    let history = to_history(prior);
    Ok((history, last.content.as_str()))
}

/// Map relay messages onto generation contents, preserving order.
pub fn to_history(messages: &[RelayMessage]) -> Vec<Content> {
    messages
        .iter()
        .map(|m| Content::text(ContentRole::from_relay_role(&m.role), m.content.clone()))
        .collect()
}

/// Index of the first history entry that repeats the previous entry's role.
///
/// Alternation is not enforced; this only feeds a debug log.
pub fn first_alternation_break(history: &[Content]) -> Option<usize> {
    history
        .windows(2)
        .position(|pair| pair[0].role == pair[1].role)
        .map(|i| i + 1)
}

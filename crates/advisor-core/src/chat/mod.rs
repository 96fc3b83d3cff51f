//! Client side of the conversation: transcript store, transport port, and
//! the session that ties them together.

pub mod session;
pub mod transcript;
pub mod transport;

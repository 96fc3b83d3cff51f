//! Shared domain types for the Ogun Startup Advisor.
//!
//! Conversation turns, relay wire shapes, generation request/response types,
//! configuration, and the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;

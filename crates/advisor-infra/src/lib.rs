//! Infrastructure layer for the Ogun Startup Advisor.
//!
//! Contains implementations of the traits defined in `advisor-core`: the
//! Gemini generation provider, the environment secret provider, and the
//! HTTP relay client, plus the configuration loader.

pub mod config;
pub mod llm;
pub mod relay_client;
pub mod secret;

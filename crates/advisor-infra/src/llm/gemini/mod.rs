//! Google Gemini generation provider.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`GenerationProvider`](advisor_core::llm::provider::GenerationProvider)
//! trait for the `generateContent` endpoint.

pub mod client;
pub mod types;

pub use client::GeminiProvider;

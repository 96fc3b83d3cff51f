//! Business logic and port trait definitions for the Ogun Startup Advisor.
//!
//! This crate defines the traits that the infrastructure layer implements
//! (generation provider, secret lookup, relay transport) and the logic built
//! on them. It depends only on `advisor-types` -- never on `advisor-infra`
//! or any network crate.

pub mod chat;
pub mod llm;
pub mod relay;
pub mod repository;

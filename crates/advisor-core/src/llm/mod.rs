//! Generation provider abstractions.
//!
//! - `GenerationProvider`: RPITIT trait for concrete backends
//! - `BoxGenerationProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;

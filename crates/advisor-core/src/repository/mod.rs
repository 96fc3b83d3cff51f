//! Port traits implemented by the infrastructure layer.
//!
//! The core crate never depends on where secrets actually come from.

pub mod secret;

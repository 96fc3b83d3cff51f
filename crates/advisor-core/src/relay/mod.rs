//! Server-side relay between the chat transcript and the generation API.

pub mod history;
pub mod persona;
pub mod service;

pub use persona::Persona;
pub use service::{RelayService, RelaySettings};

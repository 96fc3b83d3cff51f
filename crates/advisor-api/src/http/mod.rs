//! HTTP layer: the `/api/chat` relay endpoint, health check, and the
//! browser UI served from disk.

pub mod error;
pub mod handlers;
pub mod router;

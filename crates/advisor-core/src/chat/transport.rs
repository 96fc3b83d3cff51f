//! RelayTransport trait: how a chat client reaches `POST /api/chat`.

use std::future::Future;

use advisor_types::chat::{RelayRequest, RelayResponse};
use advisor_types::error::TransportError;

/// Sends a relay request and decodes whichever response shape comes back.
///
/// Implementations live in advisor-infra (e.g., `HttpRelayClient`).
pub trait RelayTransport: Send + Sync {
    fn send(
        &self,
        request: &RelayRequest,
    ) -> impl Future<Output = Result<RelayResponse, TransportError>> + Send;
}

//! Consultation backend abstraction.

use std::future::Future;

use coverly_types::error::BackendError;
use coverly_types::wire::{ChatTurnRequest, ChatTurnResponse};

/// Transport for consultation turns.
///
/// The controller talks to the orchestrator only through this trait;
/// the reqwest implementation lives in `coverly-infra` and tests swap
/// in scripted fakes. One method covers the whole protocol since the
/// backend exposes a single chat endpoint.
pub trait ConsultBackend: Send + Sync {
    /// Send one user message and return the backend's turn response.
    fn send_chat(
        &self,
        request: &ChatTurnRequest,
    ) -> impl Future<Output = Result<ChatTurnResponse, BackendError>> + Send;
}

use thiserror::Error;

/// Errors from talking to the consultation backend.
///
/// Every variant collapses into the same fixed transcript line for the
/// user; the distinction exists for logging only.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode backend response: {0}")]
    Deserialization(String),
}

//! OrchestratorClient -- concrete [`ConsultBackend`] over HTTP.
//!
//! Speaks the consultation orchestrator's single-endpoint protocol:
//! `POST {base_url}/chat` with the user message and optional
//! conversation id, JSON turn response back. Connection, timeout,
//! status, and decode failures all map onto [`BackendError`] so the
//! controller can fold any of them into the transcript.

use std::time::Duration;

use coverly_core::backend::ConsultBackend;
use coverly_types::config::AdvisorConfig;
use coverly_types::error::BackendError;
use coverly_types::wire::{ChatTurnRequest, ChatTurnResponse};

/// HTTP client for the consultation orchestrator.
///
/// Cheap to clone; the inner reqwest client shares its connection pool.
#[derive(Clone)]
pub struct OrchestratorClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
    base_url: String,
}

impl OrchestratorClient {
    /// Create a client for the backend named in `config`.
    ///
    /// A per-request timeout is applied only when `config.toml` sets
    /// one. Completing turns run premium prediction and retrieval
    /// server-side and have no fixed upper bound, so with no configured
    /// timeout the call runs on transport defaults until it resolves or
    /// the connection drops.
    pub fn new(config: &AdvisorConfig) -> Self {
        let timeout = config.request_timeout_secs.map(Duration::from_secs);
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("failed to create reqwest client");

        Self {
            client,
            timeout,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Per-request timeout, when one was configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ConsultBackend for OrchestratorClient {
    async fn send_chat(
        &self,
        request: &ChatTurnRequest,
    ) -> Result<ChatTurnResponse, BackendError> {
        let url = self.url("/chat");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BackendError::Timeout
                } else {
                    BackendError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatTurnResponse>()
            .await
            .map_err(|e| BackendError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(url: &str) -> OrchestratorClient {
        OrchestratorClient::new(&AdvisorConfig::default().with_backend_url(url))
    }

    #[test]
    fn test_url_join() {
        let client = make_client("http://localhost:5002");
        assert_eq!(client.url("/chat"), "http://localhost:5002/chat");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = make_client("http://localhost:5002/");
        assert_eq!(client.base_url(), "http://localhost:5002");
        assert_eq!(client.url("/chat"), "http://localhost:5002/chat");
    }

    #[test]
    fn test_base_url_override() {
        let client = make_client("http://localhost:5002")
            .with_base_url("https://advisor.example.com/".to_string());
        assert_eq!(client.url("/chat"), "https://advisor.example.com/chat");
    }

    #[test]
    fn test_default_backend_url() {
        let client = OrchestratorClient::new(&AdvisorConfig::default());
        assert_eq!(client.base_url(), "http://localhost:5002");
    }

    #[test]
    fn test_no_timeout_unless_configured() {
        // completing turns have no fixed upper bound server-side, so an
        // unset config must leave the transport defaults in place
        let client = OrchestratorClient::new(&AdvisorConfig::default());
        assert_eq!(client.request_timeout(), None);
    }

    #[test]
    fn test_configured_timeout_is_applied() {
        let config = AdvisorConfig {
            backend_url: "http://localhost:5002".to_string(),
            request_timeout_secs: Some(30),
        };
        let client = OrchestratorClient::new(&config);
        assert_eq!(client.request_timeout(), Some(Duration::from_secs(30)));
    }
}

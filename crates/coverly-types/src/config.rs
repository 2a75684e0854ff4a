//! Client configuration types for Coverly.
//!
//! `AdvisorConfig` represents `config.toml` in the data directory. The
//! backend endpoint used to be a hardcoded constant in the original UI;
//! here it is injected configuration with layered overrides (CLI flag,
//! environment, file, default) resolved by the caller.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Coverly client.
///
/// Loaded from `~/.coverly/config.toml`. All fields have defaults, so a
/// missing file means a working client pointed at a local orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Base URL of the consultation backend, without a trailing slash.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Per-request timeout in seconds. `None` keeps the transport default
    /// (no overall deadline), matching the original client.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_backend_url() -> String {
    "http://localhost:5002".to_string()
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: None,
        }
    }
}

impl AdvisorConfig {
    /// Apply a higher-priority backend URL (CLI flag or environment),
    /// trimming any trailing slash so path joining stays predictable.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.backend_url = url.trim_end_matches('/').to_string();
        self
    }
}

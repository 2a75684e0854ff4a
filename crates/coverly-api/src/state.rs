//! Application state wiring the CLI to its backend.
//!
//! Command handlers are generic over the `ConsultBackend` trait where it
//! matters; AppState pins the concrete reqwest client from `coverly-infra`.

use std::path::PathBuf;

use coverly_infra::config::{load_config, resolve_data_dir};
use coverly_infra::orchestrator::OrchestratorClient;
use coverly_types::config::AdvisorConfig;

/// Shared application state for CLI commands.
pub struct AppState {
    pub config: AdvisorConfig,
    pub backend: OrchestratorClient,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve configuration and wire the backend client.
    ///
    /// `backend_url` comes from `--backend-url` or `COVERLY_BACKEND_URL`
    /// and overrides whatever `config.toml` says. Config problems never
    /// abort startup; the loader falls back to defaults.
    pub async fn init(backend_url: Option<String>) -> Self {
        let data_dir = resolve_data_dir();
        let mut config = load_config(&data_dir).await;
        if let Some(url) = backend_url {
            config = config.with_backend_url(url);
        }
        let backend = OrchestratorClient::new(&config);

        Self {
            config,
            backend,
            data_dir,
        }
    }
}

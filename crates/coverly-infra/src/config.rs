//! Configuration loader for Coverly.
//!
//! Reads `config.toml` from the data directory (`~/.coverly/` in
//! production) and deserializes it into [`AdvisorConfig`]. Falls back to
//! defaults when the file is missing or malformed, so a bad config never
//! blocks a consultation.

use std::path::{Path, PathBuf};

use coverly_types::config::AdvisorConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `COVERLY_DATA_DIR` environment variable
/// 2. Platform home directory (`~/.coverly`)
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("COVERLY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".coverly");
    }

    // Last resort: current directory
    PathBuf::from(".coverly")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AdvisorConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns
///   the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(data_dir: &Path) -> AdvisorConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AdvisorConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AdvisorConfig::default();
        }
    };

    match toml::from_str::<AdvisorConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AdvisorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, AdvisorConfig::default());
        assert_eq!(config.backend_url, "http://localhost:5002");
    }

    #[tokio::test]
    async fn test_load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
backend_url = "https://advisor.example.com"
request_timeout_secs = 45
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.backend_url, "https://advisor.example.com");
        assert_eq!(config.request_timeout_secs, Some(45));
    }

    #[tokio::test]
    async fn test_load_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"request_timeout_secs = 10"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.backend_url, "http://localhost:5002");
        assert_eq!(config.request_timeout_secs, Some(10));
    }

    #[tokio::test]
    async fn test_load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, AdvisorConfig::default());
    }
}

//! Runtime configuration for the dashboard.
//!
//! Deployments override the defaults with a TOML file named by
//! `CARDIOHUB_CONFIG`, or with individual environment variables
//! (`CARDIOHUB_DATASET`, `CARDIOHUB_PORT`). A `.env` file next to the
//! binary is honoured.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CardioHubError, Result};

/// Complete process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

// ── Dataset ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the arrhythmia gene spreadsheet (CSV export).
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/arrhythmia_genes.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static` (stylesheet, illustrative images).
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load from a TOML file.
    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CardioHubError::Config(e.to_string()))
    }

    /// Load the configuration for the running process.
    ///
    /// `CARDIOHUB_CONFIG` names a TOML file; without it the defaults apply.
    /// Single-field variables win over the file.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match std::env::var("CARDIOHUB_CONFIG") {
            Ok(path) => Self::from_toml(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(path) = std::env::var("CARDIOHUB_DATASET") {
            config.dataset.path = PathBuf::from(path);
        }
        if let Ok(port) = std::env::var("CARDIOHUB_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| CardioHubError::Config(format!("invalid CARDIOHUB_PORT: {port}")))?;
        }

        Ok(config)
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.dataset.path, PathBuf::from("data/arrhythmia_genes.csv"));
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dataset.path, PathBuf::from("data/arrhythmia_genes.csv"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.dataset.path, parsed.dataset.path);
        assert_eq!(config.server.port, parsed.server.port);
    }
}

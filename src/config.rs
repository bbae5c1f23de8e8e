use crate::error::ServeError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    pub dataset: DatasetConfig,

    #[serde(default)]
    pub tls: TlsConfig,

    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub reread_on_query: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TlsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub cert_path: Option<PathBuf>,
    #[serde(default)]
    pub key_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatcherConfig {
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_query_log_sinks")]
    pub query_log_sinks: Vec<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}

// Defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    // Port of the reference deployment.
    46789
}
fn default_strategy() -> String {
    "linear".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_query_log_sinks() -> Vec<String> {
    vec!["console".to_string()]
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            query_log_sinks: default_query_log_sinks(),
            file_path: None,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Parses the original flat `key=value` configuration format:
    /// `linuxpath` (dataset file), `REREAD_ON_QUERY` (0/1), `ssl_enabled` (0/1).
    /// Unknown keys are ignored.
    pub fn from_legacy(path: impl AsRef<Path>) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).context("Failed to read legacy config file")?;

        let mut dataset_path: Option<PathBuf> = None;
        let mut reread_on_query = false;
        let mut tls_enabled = false;

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "linuxpath" => dataset_path = Some(PathBuf::from(value.trim())),
                "REREAD_ON_QUERY" => reread_on_query = value.trim() == "1",
                "ssl_enabled" => tls_enabled = value.trim() == "1",
                _ => {}
            }
        }

        let path = dataset_path
            .ok_or_else(|| ServeError::Config("legacy config is missing linuxpath".into()))?;

        let config = Config {
            host: default_host(),
            port: default_port(),
            dataset: DatasetConfig {
                path,
                reread_on_query,
            },
            tls: TlsConfig {
                enabled: tls_enabled,
                // File names used by the reference deployment.
                cert_path: tls_enabled.then(|| PathBuf::from("ssl.pem")),
                key_path: tls_enabled.then(|| PathBuf::from("private.key")),
            },
            matcher: MatcherConfig::default(),
            logging: LoggingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tls.enabled && (self.tls.cert_path.is_none() || self.tls.key_path.is_none()) {
            return Err(ServeError::Config(
                "tls.enabled requires tls.cert_path and tls.key_path".into(),
            )
            .into());
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

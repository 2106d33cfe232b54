//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the listen address, log level and format, and the pacing of simulated
//! vault uploads. Values come from an optional TOML file, then environment
//! overrides.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const ENV_CONFIG_PATH: &str = "NEXUSHUB_CONFIG";
pub const ENV_HOST: &str = "NEXUSHUB_HOST";
pub const ENV_PORT: &str = "NEXUSHUB_PORT";
pub const ENV_LOG: &str = "NEXUSHUB_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Base `EnvFilter` directive, e.g. "info" or "nexushub_backend=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "compact" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Pacing of the simulated upload progress loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_max_step")]
    pub max_step_percent: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_tick_ms() -> u64 {
    300
}

fn default_max_step() -> f64 {
    15.0
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_step_percent: default_max_step(),
        }
    }
}

impl Config {
    /// Loads the config file if it exists, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Applies `NEXUSHUB_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("{ENV_PORT} is not a valid port: {port}")))?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid listen address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.listen_addr().unwrap().port(), 3000);
        assert_eq!(config.uploads.tick_ms, 300);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8080

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn env_overrides_win() {
        let mut config = Config::default();
        config
            .apply_env_overrides(|key| match key {
                ENV_PORT => Some("4000".to_string()),
                ENV_LOG => Some("debug".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn bad_port_override_is_a_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_env_overrides(|key| (key == ENV_PORT).then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(Config::from_toml("[server"), Err(AppError::Config(_))));
    }
}

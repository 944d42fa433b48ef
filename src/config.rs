//! Configuration management for calcdriver

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Driver configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the automation endpoint
    pub endpoint: String,

    /// Application identity (package name or executable path)
    pub app: String,

    /// Startup arguments passed to the application
    pub app_args: Vec<String>,

    /// Attach timeout for session setup in milliseconds
    pub attach_timeout: u64,

    /// Default timeout for remote calls in milliseconds
    pub command_timeout: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:4723".to_string(),
            app: "Microsoft.WindowsCalculator_8wekyb3d8bbwe!App".to_string(),
            app_args: vec![],
            attach_timeout: 15000,
            command_timeout: 30000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(endpoint) = env::var("CALCDRIVER_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(app) = env::var("CALCDRIVER_APP") {
            config.app = app;
        }

        if let Ok(args) = env::var("CALCDRIVER_APP_ARGS") {
            config.app_args = args.split_whitespace().map(String::from).collect();
        }

        if let Ok(timeout) = env::var("CALCDRIVER_ATTACH_TIMEOUT") {
            config.attach_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid CALCDRIVER_ATTACH_TIMEOUT"))?;
        }

        if let Ok(timeout) = env::var("CALCDRIVER_COMMAND_TIMEOUT") {
            config.command_timeout = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid CALCDRIVER_COMMAND_TIMEOUT"))?;
        }

        if let Ok(log_level) = env::var("CALCDRIVER_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:4723");
        assert_eq!(config.attach_timeout, 15000);
        assert!(config.app_args.is_empty());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            endpoint = "http://10.0.0.5:4723"
            attach_timeout = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://10.0.0.5:4723");
        assert_eq!(config.attach_timeout, 5000);
        // Unset fields fall back to defaults
        assert_eq!(config.command_timeout, 30000);
    }
}

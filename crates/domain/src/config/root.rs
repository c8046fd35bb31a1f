use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::settings::{ClientSettings, ServerSettings};

/// Main configuration structure for edge-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (bind address, port, workers)
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Recursive-resolution client settings
    #[serde(default)]
    pub client_settings: ClientSettings,

    /// Authoritative-zone server settings
    #[serde(default)]
    pub server_settings: ServerSettings,

    /// Static cluster inventory: cluster name to `ip:port` endpoints
    #[serde(default)]
    pub clusters: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. edge-dns.toml in current directory
    /// 3. /etc/edge-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("edge-dns.toml").exists() {
            Self::from_file("edge-dns.toml")?
        } else if std::path::Path::new("/etc/edge-dns/config.toml").exists() {
            Self::from_file("/etc/edge-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Shallow validation; the filter settings get their deep validation
    /// when lowered into a `FilterConfig`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.server_settings.known_domainname_suffixes.is_empty() {
            return Err(ConfigError::Validation(
                "No known domain name suffixes configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}

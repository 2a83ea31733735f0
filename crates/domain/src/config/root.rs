use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::nameserver::parse_nameserver;
use crate::TransportMode;

/// Main configuration structure for a lookup session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Nameservers queried in order; empty means the system defaults
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Transport used for every query
    #[serde(default)]
    pub transport: TransportMode,

    /// Surface non-fatal resolver anomalies as diagnostics
    #[serde(default = "default_true")]
    pub verbose: bool,

    /// Per-nameserver timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            transport: TransportMode::default(),
            verbose: default_true(),
            timeout_ms: default_timeout_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

impl LookupConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nslookup.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("nslookup.toml").exists() {
            Self::from_file("nslookup.toml")?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }

        if !self.logging.has_known_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }

        self.nameserver_addrs().map(|_| ())
    }

    /// Configured nameservers as socket addresses, in order.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.nameservers
            .iter()
            .map(|s| parse_nameserver(s))
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    2000
}

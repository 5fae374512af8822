use serde::{Deserialize, Serialize};

use super::edge::EdgeConfig;
use super::errors::ConfigError;
use super::geolocation::GeolocationConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-geodns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-geodns/config.toml";

/// Main configuration structure for Ferrous GeoDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening address and socket tuning
    #[serde(default)]
    pub server: ServerConfig,

    /// Served zone and origin self-answer
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Edge servers answered by proximity
    #[serde(default)]
    pub edge: EdgeConfig,

    /// Querier geolocation
    #[serde(default)]
    pub geolocation: GeolocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-geodns.toml in current directory
    /// 3. /etc/ferrous-geodns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration. Any error here is fatal to startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.zone.validate()?;

        if self.edge.servers.is_empty() {
            return Err(ConfigError::EmptyEdgeServerSet);
        }
        for server in &self.edge.servers {
            server.validate()?;
        }

        if self.geolocation.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Geolocation timeout cannot be 0".to_string(),
            ));
        }
        for network in &self.geolocation.networks {
            network.validate()?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

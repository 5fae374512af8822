use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::geo::Coordinates;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeolocationConfig {
    /// Upper bound on a single lookup made while answering a query
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// CIDR → coordinates table, matched longest-prefix first
    #[serde(default)]
    pub networks: Vec<GeoNetworkEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoNetworkEntry {
    pub cidr: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoNetworkEntry {
    pub fn new(cidr: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            cidr: cidr.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cidr.contains('/') {
            return Err(ConfigError::Validation(format!(
                "Geolocation network '{}' must include a prefix (e.g., 10.0.0.0/8)",
                self.cidr
            )));
        }
        self.cidr.parse::<ipnetwork::IpNetwork>().map_err(|e| {
            ConfigError::Validation(format!("Invalid geolocation CIDR '{}': {}", self.cidr, e))
        })?;
        if !self.coordinates().is_valid() {
            return Err(ConfigError::Validation(format!(
                "Geolocation network {} has out-of-range coordinates ({}, {})",
                self.cidr, self.latitude, self.longitude
            )));
        }
        Ok(())
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            networks: vec![],
        }
    }
}

fn default_timeout_ms() -> u64 {
    250
}

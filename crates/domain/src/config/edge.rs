use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;
use crate::geo::Coordinates;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EdgeConfig {
    /// Ordered edge table. The first entry is the fallback answer when a
    /// querier cannot be located, and wins distance ties.
    #[serde(default)]
    pub servers: Vec<EdgeServerEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeServerEntry {
    pub ip: String,

    /// Optional fixed location; geolocated at startup when absent
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,
}

impl EdgeServerEntry {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn ipv4(&self) -> Result<Ipv4Addr, ConfigError> {
        self.ip.parse::<Ipv4Addr>().map_err(|e| {
            ConfigError::Validation(format!("Invalid edge server IP '{}': {}", self.ip, e))
        })
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ipv4()?;
        match (self.latitude, self.longitude) {
            (None, None) => Ok(()),
            (Some(latitude), Some(longitude)) => {
                if Coordinates::new(latitude, longitude).is_valid() {
                    Ok(())
                } else {
                    Err(ConfigError::Validation(format!(
                        "Edge server {} has out-of-range coordinates ({}, {})",
                        self.ip, latitude, longitude
                    )))
                }
            }
            _ => Err(ConfigError::Validation(format!(
                "Edge server {} must set both latitude and longitude, or neither",
                self.ip
            ))),
        }
    }
}

use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Geolocation failed for {ip}: {reason}")]
    GeolocationFailure { ip: IpAddr, reason: String },

    #[error("Geolocation lookup for {ip} timed out after {timeout_ms}ms")]
    GeolocationTimeout { ip: IpAddr, timeout_ms: u64 },

    #[error("No edge servers configured")]
    EmptyEdgeServerSet,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

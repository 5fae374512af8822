use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use super::errors::ConfigError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 253;

/// The served zone and the self-answer for its origin host.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// Apex domain this server is authoritative for (e.g. "cdn-test.space")
    #[serde(default = "default_apex")]
    pub apex: String,

    /// Host label answered with `origin_ip` (queried as `<origin_host>.<apex>`)
    #[serde(default = "default_origin_host")]
    pub origin_host: String,

    #[serde(default = "default_origin_ip")]
    pub origin_ip: String,

    /// TTL in seconds for every answer this server emits
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl ZoneConfig {
    /// Fully qualified name of the origin host, without trailing dot.
    pub fn origin_name(&self) -> String {
        format!("{}.{}", self.origin_host, self.apex_name())
    }

    /// Apex with any trailing dot removed.
    pub fn apex_name(&self) -> &str {
        self.apex.trim_end_matches('.')
    }

    pub fn origin_ipv4(&self) -> Result<Ipv4Addr, ConfigError> {
        self.origin_ip.parse::<Ipv4Addr>().map_err(|e| {
            ConfigError::Validation(format!("Invalid origin IP '{}': {}", self.origin_ip, e))
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_domain_name(self.apex_name())
            .map_err(|e| ConfigError::Validation(format!("Invalid zone apex: {}", e)))?;
        validate_domain_name(&self.origin_name())
            .map_err(|e| ConfigError::Validation(format!("Invalid origin host: {}", e)))?;
        self.origin_ipv4()?;
        Ok(())
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            apex: default_apex(),
            origin_host: default_origin_host(),
            origin_ip: default_origin_ip(),
            ttl: default_ttl(),
        }
    }
}

/// Checks a dotted name (no trailing dot) against RFC 1035 length limits.
pub fn validate_domain_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("'{}' exceeds {} characters", name, MAX_NAME_LEN));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(format!("'{}' contains an empty label", name));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "label '{}' exceeds {} characters",
                label, MAX_LABEL_LEN
            ));
        }
        if !label.is_ascii() {
            return Err(format!("label '{}' is not ASCII", label));
        }
    }
    Ok(())
}

fn default_apex() -> String {
    "cdn-test.space".to_string()
}

fn default_origin_host() -> String {
    "origin".to_string()
}

fn default_origin_ip() -> String {
    "127.0.0.1".to_string()
}

fn default_ttl() -> u32 {
    50
}

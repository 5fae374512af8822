use async_trait::async_trait;
use ferrous_geodns_application::ports::GeoLocator;
use ferrous_geodns_domain::config::GeolocationConfig;
use ferrous_geodns_domain::{Coordinates, DomainError};
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// Static CIDR → coordinates table with longest-prefix matching.
///
/// Among networks of equal prefix length the one listed first wins.
#[derive(Debug, Clone, Default)]
pub struct SubnetGeoLocator {
    networks: Vec<(IpNetwork, Coordinates)>,
}

impl SubnetGeoLocator {
    pub fn new(networks: Vec<(IpNetwork, Coordinates)>) -> Self {
        Self { networks }
    }

    pub fn from_config(config: &GeolocationConfig) -> Result<Self, DomainError> {
        let mut networks = Vec::with_capacity(config.networks.len());

        for entry in &config.networks {
            let network: IpNetwork = entry.cidr.parse().map_err(|e| {
                DomainError::ConfigError(format!("Invalid CIDR {}: {}", entry.cidr, e))
            })?;
            networks.push((network, entry.coordinates()));
        }

        Ok(Self { networks })
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// IPv4-mapped IPv6 addresses (dual-stack sockets) match IPv4 networks.
    pub fn lookup(&self, ip: IpAddr) -> Option<Coordinates> {
        let ip = ip.to_canonical();
        let mut best_match: Option<(u8, Coordinates)> = None;

        for (network, coords) in &self.networks {
            if network.contains(ip) {
                let prefix = network.prefix();

                match best_match {
                    None => best_match = Some((prefix, *coords)),
                    Some((existing_prefix, _)) if prefix > existing_prefix => {
                        best_match = Some((prefix, *coords));
                    }
                    _ => {}
                }
            }
        }

        best_match.map(|(_, coords)| coords)
    }
}

#[async_trait]
impl GeoLocator for SubnetGeoLocator {
    async fn locate(&self, ip: IpAddr) -> Result<Coordinates, DomainError> {
        self.lookup(ip)
            .ok_or_else(|| DomainError::GeolocationFailure {
                ip,
                reason: "address is not in any configured network".to_string(),
            })
    }
}

use async_trait::async_trait;
use ferrous_geodns_domain::{Coordinates, DomainError};
use std::net::IpAddr;

/// Resolves an address to a geographic position.
///
/// Implementations report "no coordinates available" as
/// `DomainError::GeolocationFailure`; callers treat every failure the same way.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self, ip: IpAddr) -> Result<Coordinates, DomainError>;
}

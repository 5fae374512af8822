use ferrous_geodns_application::ports::GeoLocator;
use ferrous_geodns_domain::config::EdgeServerEntry;
use ferrous_geodns_domain::{DomainError, EdgeServer};
use std::net::IpAddr;
use tracing::{debug, info};

/// Resolves the configured edge list into the immutable edge table.
///
/// Entries without coordinates are located once through `geo_locator`; any
/// failure aborts, naming the offending address. Configured order is kept.
pub async fn build_edge_servers(
    entries: &[EdgeServerEntry],
    geo_locator: &dyn GeoLocator,
) -> Result<Vec<EdgeServer>, DomainError> {
    if entries.is_empty() {
        return Err(DomainError::EmptyEdgeServerSet);
    }

    let mut edges = Vec::with_capacity(entries.len());

    for entry in entries {
        let ip = entry
            .ipv4()
            .map_err(|e| DomainError::InvalidIpAddress(e.to_string()))?;

        let coords = match entry.coordinates() {
            Some(coords) => coords,
            None => {
                let coords = geo_locator.locate(IpAddr::V4(ip)).await?;
                debug!(edge = %ip, latitude = coords.latitude, longitude = coords.longitude, "Edge server geolocated");
                coords
            }
        };

        edges.push(EdgeServer::new(ip, coords));
    }

    info!(edges = edges.len(), default_edge = %edges[0].ip, "Edge server table ready");

    Ok(edges)
}

use ferrous_geodns_domain::{Coordinates, DomainError, EdgeServer};
use std::net::Ipv4Addr;

/// Nearest-edge selection over an immutable, non-empty edge table.
#[derive(Debug, Clone)]
pub struct ProximityResolver {
    edges: Vec<EdgeServer>,
}

impl ProximityResolver {
    pub fn new(edges: Vec<EdgeServer>) -> Result<Self, DomainError> {
        if edges.is_empty() {
            return Err(DomainError::EmptyEdgeServerSet);
        }
        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[EdgeServer] {
        &self.edges
    }

    /// Answer used when the querier cannot be located: the first configured edge.
    pub fn default_edge(&self) -> Ipv4Addr {
        self.edges[0].ip
    }

    /// Returns the edge with the smallest great-circle distance to `querier`.
    /// Ties go to the edge listed first.
    pub fn select_nearest(&self, querier: &Coordinates) -> Ipv4Addr {
        let mut nearest = &self.edges[0];
        let mut min_distance = querier.distance_km(&nearest.coords);

        for edge in &self.edges[1..] {
            let distance = querier.distance_km(&edge.coords);
            if distance < min_distance {
                nearest = edge;
                min_distance = distance;
            }
        }

        nearest.ip
    }
}

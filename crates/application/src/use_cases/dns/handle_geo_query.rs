use crate::ports::GeoLocator;
use crate::services::{ProximityResolver, QueryClassifier, QueryDisposition, ResponseBuilder};
use ferrous_geodns_domain::{Coordinates, DnsQueryPacket, DnsResponse, DomainError};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_GEO_TIMEOUT: Duration = Duration::from_millis(250);

/// How the answer address (if any) was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Refused,
    Origin,
    NearestEdge,
    FallbackEdge,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Refused => "refused",
            AnswerSource::Origin => "origin",
            AnswerSource::NearestEdge => "nearest_edge",
            AnswerSource::FallbackEdge => "fallback_edge",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeoQueryOutcome {
    pub response: DnsResponse,
    pub source: AnswerSource,
}

/// Classifies one decoded query and builds its reply.
///
/// Well-formed in-zone A queries always get a NOERROR answer: a failed or
/// slow geolocation lookup degrades to the default edge server.
pub struct HandleGeoQueryUseCase {
    classifier: QueryClassifier,
    resolver: Arc<ProximityResolver>,
    geo_locator: Arc<dyn GeoLocator>,
    origin_ip: Ipv4Addr,
    ttl: u32,
    geo_timeout: Duration,
}

impl HandleGeoQueryUseCase {
    pub fn new(
        classifier: QueryClassifier,
        resolver: Arc<ProximityResolver>,
        geo_locator: Arc<dyn GeoLocator>,
        origin_ip: Ipv4Addr,
        ttl: u32,
    ) -> Self {
        Self {
            classifier,
            resolver,
            geo_locator,
            origin_ip,
            ttl,
            geo_timeout: DEFAULT_GEO_TIMEOUT,
        }
    }

    pub fn with_geo_timeout(mut self, timeout: Duration) -> Self {
        self.geo_timeout = timeout;
        self
    }

    pub async fn execute(&self, query: &DnsQueryPacket, client_ip: IpAddr) -> GeoQueryOutcome {
        match self.classifier.classify(&query.question) {
            QueryDisposition::Refuse => {
                debug!(
                    domain = %query.question.name,
                    record_type = %query.question.record_type,
                    client = %client_ip,
                    "Refusing query"
                );
                GeoQueryOutcome {
                    response: ResponseBuilder::refused(query),
                    source: AnswerSource::Refused,
                }
            }
            QueryDisposition::AnswerOrigin => GeoQueryOutcome {
                response: ResponseBuilder::answer(query, self.origin_ip, self.ttl),
                source: AnswerSource::Origin,
            },
            QueryDisposition::Delegate => {
                let (edge_ip, source) = self.resolve_edge(client_ip).await;
                GeoQueryOutcome {
                    response: ResponseBuilder::answer(query, edge_ip, self.ttl),
                    source,
                }
            }
        }
    }

    /// Picks the edge for `client_ip`, falling back to the default edge when
    /// the querier cannot be located in time.
    pub async fn resolve_edge(&self, client_ip: IpAddr) -> (Ipv4Addr, AnswerSource) {
        match self.locate(client_ip).await {
            Ok(coords) => (
                self.resolver.select_nearest(&coords),
                AnswerSource::NearestEdge,
            ),
            Err(e) => {
                let fallback = self.resolver.default_edge();
                warn!(
                    client = %client_ip,
                    error = %e,
                    fallback = %fallback,
                    "Geolocation failed, answering with default edge"
                );
                (fallback, AnswerSource::FallbackEdge)
            }
        }
    }

    async fn locate(&self, client_ip: IpAddr) -> Result<Coordinates, DomainError> {
        match tokio::time::timeout(self.geo_timeout, self.geo_locator.locate(client_ip)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::GeolocationTimeout {
                ip: client_ip,
                timeout_ms: self.geo_timeout.as_millis() as u64,
            }),
        }
    }
}

use ferrous_geodns_application::ports::GeoLocator;
use ferrous_geodns_application::services::{ProximityResolver, QueryClassifier};
use ferrous_geodns_application::use_cases::HandleGeoQueryUseCase;
use ferrous_geodns_domain::Config;
use ferrous_geodns_infrastructure::geo::{build_edge_servers, SubnetGeoLocator};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct GeoDnsServices {
    pub handler_use_case: Arc<HandleGeoQueryUseCase>,
}

impl GeoDnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let locator = SubnetGeoLocator::from_config(&config.geolocation)?;
        info!(networks = locator.len(), "Geolocation table loaded");
        let geo_locator: Arc<dyn GeoLocator> = Arc::new(locator);

        let edges = build_edge_servers(&config.edge.servers, geo_locator.as_ref()).await?;
        let resolver = Arc::new(ProximityResolver::new(edges)?);

        let handler_use_case = Arc::new(
            HandleGeoQueryUseCase::new(
                QueryClassifier::from_zone(&config.zone),
                resolver,
                geo_locator,
                config.zone.origin_ipv4()?,
                config.zone.ttl,
            )
            .with_geo_timeout(Duration::from_millis(config.geolocation.timeout_ms)),
        );

        Ok(Self { handler_use_case })
    }
}

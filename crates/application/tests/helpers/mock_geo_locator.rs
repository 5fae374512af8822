use async_trait::async_trait;
use ferrous_geodns_application::ports::GeoLocator;
use ferrous_geodns_domain::{Coordinates, DomainError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockGeoLocator {
    locations: Arc<RwLock<HashMap<IpAddr, Coordinates>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    calls: Arc<AtomicUsize>,
}

impl MockGeoLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location(&self, ip: &str, latitude: f64, longitude: f64) {
        self.locations
            .write()
            .unwrap()
            .insert(ip.parse().unwrap(), Coordinates::new(latitude, longitude));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.write().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoLocator for MockGeoLocator {
    async fn locate(&self, ip: IpAddr) -> Result<Coordinates, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.locations
            .read()
            .unwrap()
            .get(&ip)
            .copied()
            .ok_or_else(|| DomainError::GeolocationFailure {
                ip,
                reason: "no coordinates for address".to_string(),
            })
    }
}

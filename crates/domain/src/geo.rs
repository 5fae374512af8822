use std::net::Ipv4Addr;

/// Mean Earth radius in kilometres. Only relative ordering of distances is
/// used, so the exact value is not load-bearing.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in kilometres (haversine formula).
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_KM * c
    }
}

/// An answerable edge address with its fixed location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeServer {
    pub ip: Ipv4Addr,
    pub coords: Coordinates,
}

impl EdgeServer {
    pub fn new(ip: Ipv4Addr, coords: Coordinates) -> Self {
        Self { ip, coords }
    }
}

mod geo_locator;

pub use geo_locator::GeoLocator;

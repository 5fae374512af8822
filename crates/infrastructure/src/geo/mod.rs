pub mod edge_table;
pub mod subnet_locator;

pub use edge_table::build_edge_servers;
pub use subnet_locator::SubnetGeoLocator;

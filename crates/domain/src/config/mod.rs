//! Configuration module for Ferrous GeoDNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listening address and socket tuning
//! - `zone`: Served apex, origin self-answer and TTL
//! - `edge`: Edge server table
//! - `geolocation`: Coordinate table and lookup timeout
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod edge;
pub mod errors;
pub mod geolocation;
pub mod logging;
pub mod root;
pub mod server;
pub mod zone;

pub use edge::{EdgeConfig, EdgeServerEntry};
pub use errors::ConfigError;
pub use geolocation::{GeoNetworkEntry, GeolocationConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::ZoneConfig;

//! Ferrous GeoDNS Domain Layer
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod geo;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::DnsHeader;
pub use dns_message::{DnsQueryPacket, DnsResponse};
pub use dns_question::DnsQuestion;
pub use dns_record::{DnsRecord, RecordClass, RecordType, ResponseCode};
pub use errors::DomainError;
pub use geo::{Coordinates, EdgeServer};

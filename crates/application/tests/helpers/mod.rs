#![allow(dead_code)]

pub mod mock_geo_locator;

pub use mock_geo_locator::MockGeoLocator;

use ferrous_geodns_domain::{
    Coordinates, DnsHeader, DnsQueryPacket, DnsQuestion, EdgeServer, RecordClass, RecordType,
};
use std::net::Ipv4Addr;

pub const QUERY_ID: u16 = 0x4A2F;

pub fn query(name: &str, record_type: RecordType) -> DnsQueryPacket {
    DnsQueryPacket {
        header: DnsHeader {
            id: QUERY_ID,
            flags: 0x0100,
            qdcount: 1,
            ..Default::default()
        },
        question: DnsQuestion::new(name, record_type, RecordClass::IN),
        question_end: 12 + name.len() + 2 + 4,
    }
}

pub fn edge(ip: [u8; 4], latitude: f64, longitude: f64) -> EdgeServer {
    EdgeServer::new(
        Ipv4Addr::from(ip),
        Coordinates::new(latitude, longitude),
    )
}

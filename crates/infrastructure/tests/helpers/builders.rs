#![allow(dead_code)]
use ferrous_geodns_application::services::{ProximityResolver, QueryClassifier};
use ferrous_geodns_application::use_cases::HandleGeoQueryUseCase;
use ferrous_geodns_domain::{Coordinates, EdgeServer};
use ferrous_geodns_infrastructure::dns::DnsServerHandler;
use ferrous_geodns_infrastructure::geo::SubnetGeoLocator;
use std::net::Ipv4Addr;
use std::sync::Arc;

pub const ORIGIN_IP: Ipv4Addr = Ipv4Addr::new(198, 51, 100, 7);
pub const TTL: u32 = 50;
pub const ASHBURN_EDGE: Ipv4Addr = Ipv4Addr::new(3, 204, 143, 48);
pub const AMSTERDAM_EDGE: Ipv4Addr = Ipv4Addr::new(5, 20, 98, 162);
pub const TOKYO_EDGE: Ipv4Addr = Ipv4Addr::new(28, 170, 247, 194);

/// Hand-assembled wire packets, including malformed ones.
pub struct PacketBuilder {
    buf: Vec<u8>,
}

impl PacketBuilder {
    pub fn query(id: u16, flags: u16, qdcount: u16) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&flags.to_be_bytes());
        buf.extend_from_slice(&qdcount.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
        Self { buf }
    }

    pub fn name(mut self, name: &str) -> Self {
        for label in name.split('.').filter(|l| !l.is_empty()) {
            self.buf.push(label.len() as u8);
            self.buf.extend_from_slice(label.as_bytes());
        }
        self.buf.push(0);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn pointer(mut self, offset: u16) -> Self {
        self.buf.push(0xC0 | (offset >> 8) as u8);
        self.buf.push(offset as u8);
        self
    }

    pub fn type_class(mut self, record_type: u16, record_class: u16) -> Self {
        self.buf.extend_from_slice(&record_type.to_be_bytes());
        self.buf.extend_from_slice(&record_class.to_be_bytes());
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

pub fn a_query(id: u16, name: &str) -> Vec<u8> {
    PacketBuilder::query(id, 0x0100, 1)
        .name(name)
        .type_class(1, 1)
        .build()
}

/// Wires the full query path over a subnet table: 203.0.113.0/24 sits in
/// Paris, 198.18.0.0/15 in Tokyo, everything else is unlocatable.
pub struct GeoDnsBuilder;

impl GeoDnsBuilder {
    pub fn edges() -> Vec<EdgeServer> {
        vec![
            EdgeServer::new(ASHBURN_EDGE, Coordinates::new(39.04, -77.49)),
            EdgeServer::new(AMSTERDAM_EDGE, Coordinates::new(52.37, 4.89)),
            EdgeServer::new(TOKYO_EDGE, Coordinates::new(35.68, 139.65)),
        ]
    }

    pub fn locator() -> SubnetGeoLocator {
        SubnetGeoLocator::new(vec![
            ("203.0.113.0/24".parse().unwrap(), Coordinates::new(48.85, 2.35)),
            ("198.18.0.0/15".parse().unwrap(), Coordinates::new(35.0, 135.0)),
        ])
    }

    pub fn use_case() -> HandleGeoQueryUseCase {
        HandleGeoQueryUseCase::new(
            QueryClassifier::new("cdn-test.space", "origin.cdn-test.space"),
            Arc::new(ProximityResolver::new(Self::edges()).unwrap()),
            Arc::new(Self::locator()),
            ORIGIN_IP,
            TTL,
        )
    }

    pub fn handler() -> DnsServerHandler {
        DnsServerHandler::new(Arc::new(Self::use_case()))
    }
}

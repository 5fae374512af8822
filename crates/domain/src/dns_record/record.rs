use super::{RecordClass, RecordType};
use std::net::Ipv4Addr;

/// Answer-section resource record. Only A records are ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub record_type: RecordType,

    pub record_class: RecordClass,

    pub ttl: u32,

    pub address: Ipv4Addr,
}

impl DnsRecord {
    pub const A_RDLENGTH: u16 = 4;

    pub fn new(
        name: String,
        record_type: RecordType,
        record_class: RecordClass,
        ttl: u32,
        address: Ipv4Addr,
    ) -> Self {
        Self {
            name,
            record_type,
            record_class,
            ttl,
            address,
        }
    }

    pub fn rdlength(&self) -> u16 {
        Self::A_RDLENGTH
    }
}

use super::encoder::encode;
use super::errors::EncodeError;
use ferrous_geodns_domain::dns_header::RECURSION_DESIRED;
use ferrous_geodns_domain::{DnsHeader, DnsQuestion, RecordClass, RecordType};

/// Standard recursive-desired A/IN query for `name`.
pub fn build_query(name: &str, id: u16) -> Result<Vec<u8>, EncodeError> {
    let header = DnsHeader {
        id,
        flags: RECURSION_DESIRED,
        qdcount: 1,
        ..Default::default()
    };
    let question = DnsQuestion::new(name, RecordType::A, RecordClass::IN);

    encode(&header, &question, &[])
}

/// Same as [`build_query`] with a random ID, returned alongside the packet.
pub fn build_random_query(name: &str) -> Result<(u16, Vec<u8>), EncodeError> {
    let id = fastrand::u16(..);
    Ok((id, build_query(name, id)?))
}

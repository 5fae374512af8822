use ferrous_geodns_domain::{DnsHeader, DnsQueryPacket, DnsRecord, DnsResponse, ResponseCode};
use std::net::Ipv4Addr;

/// Builds replies that reuse the query's ID, flags and question verbatim.
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// NOERROR with a single A answer for the question's name.
    pub fn answer(query: &DnsQueryPacket, address: Ipv4Addr, ttl: u32) -> DnsResponse {
        let header = DnsHeader::response_to(&query.header, ResponseCode::NoError);
        let mut response = DnsResponse::new(header, query.question.clone());

        response.add_answer(DnsRecord::new(
            query.question.name.clone(),
            query.question.record_type,
            query.question.record_class,
            ttl,
            address,
        ));

        response
    }

    /// REFUSED with the question echoed and no answer section.
    pub fn refused(query: &DnsQueryPacket) -> DnsResponse {
        let header = DnsHeader::response_to(&query.header, ResponseCode::Refused);
        DnsResponse::new(header, query.question.clone())
    }
}

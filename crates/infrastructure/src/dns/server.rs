use crate::dns::codec::{decode_query, encode_response};
use ferrous_geodns_application::use_cases::HandleGeoQueryUseCase;
use ferrous_geodns_domain::ResponseCode;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one raw datagram into an optional raw reply.
///
/// Anything that fails to decode yields `None`: malformed traffic on the
/// port never gets a response.
pub struct DnsServerHandler {
    use_case: Arc<HandleGeoQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleGeoQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_raw_udp(&self, buf: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let query = match decode_query(buf) {
            Ok(query) => query,
            Err(e) => {
                debug!(client = %client_ip, len = buf.len(), error = %e, "Dropping malformed datagram");
                return None;
            }
        };

        let outcome = self.use_case.execute(&query, client_ip).await;
        let response = &outcome.response;

        debug!(
            domain = %query.question.name,
            record_type = %query.question.record_type,
            client = %client_ip,
            rcode = ResponseCode::from_u8(response.header.rcode()).map_or("UNKNOWN", |code| code.as_str()),
            source = outcome.source.as_str(),
            answer = ?response.first_answer().map(|record| record.address),
            "Query answered"
        );

        match encode_response(response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(domain = %query.question.name, error = %e, "Failed to encode response");
                None
            }
        }
    }
}

use super::decoder::MAX_PACKET_SIZE;
use super::errors::EncodeError;
use ferrous_geodns_domain::dns_header::TRUNCATED_FLAG;
use ferrous_geodns_domain::{DnsHeader, DnsQuestion, DnsRecord, DnsResponse};

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;

/// Encodes a reply for the UDP transport.
///
/// A reply that would exceed `MAX_PACKET_SIZE` is sent as header plus
/// question only, with TC set and ANCOUNT 0. The question fits whenever the
/// query did.
pub fn encode_response(response: &DnsResponse) -> Result<Vec<u8>, EncodeError> {
    let bytes = encode(&response.header, &response.question, &response.answers)?;
    if bytes.len() <= MAX_PACKET_SIZE {
        return Ok(bytes);
    }

    let header = DnsHeader {
        flags: response.header.flags | TRUNCATED_FLAG,
        ..response.header
    };
    encode(&header, &response.question, &[])
}

/// Serialises a one-question message.
///
/// Section counts are written from what is actually encoded: QDCOUNT 1,
/// ANCOUNT `answers.len()`, NSCOUNT and ARCOUNT 0. Names are never compressed.
pub fn encode(
    header: &DnsHeader,
    question: &DnsQuestion,
    answers: &[DnsRecord],
) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(MAX_PACKET_SIZE);

    put_u16(&mut buf, header.id);
    put_u16(&mut buf, header.flags);
    put_u16(&mut buf, 1);
    put_u16(&mut buf, answers.len() as u16);
    put_u16(&mut buf, 0);
    put_u16(&mut buf, 0);

    encode_name(&question.name, &mut buf)?;
    put_u16(&mut buf, question.record_type.to_u16());
    put_u16(&mut buf, question.record_class.to_u16());

    for record in answers {
        encode_name(&record.name, &mut buf)?;
        put_u16(&mut buf, record.record_type.to_u16());
        put_u16(&mut buf, record.record_class.to_u16());
        buf.extend_from_slice(&record.ttl.to_be_bytes());
        put_u16(&mut buf, record.rdlength());
        buf.extend_from_slice(&record.address.octets());
    }

    Ok(buf)
}

/// Writes `name` as length-prefixed labels plus the terminating zero.
///
/// A single trailing dot is accepted; the empty name encodes as the root.
pub fn encode_name(name: &str, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let mut wire_len = 1usize;

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(EncodeError::EmptyLabel(name.to_string()));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(EncodeError::LabelTooLong(label.to_string()));
            }
            wire_len += label.len() + 1;
            if wire_len > MAX_NAME_WIRE_LEN {
                return Err(EncodeError::NameTooLong(name.to_string()));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }

    buf.push(0);
    Ok(())
}

fn put_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name_spells_out_labels() {
        let mut buf = Vec::new();
        encode_name("www.cdn-test.space", &mut buf).unwrap();
        assert_eq!(
            buf,
            [
                3, b'w', b'w', b'w', 8, b'c', b'd', b'n', b'-', b't', b'e', b's', b't', 5, b's',
                b'p', b'a', b'c', b'e', 0
            ]
        );
    }

    #[test]
    fn test_encode_empty_name_is_root() {
        let mut buf = Vec::new();
        encode_name("", &mut buf).unwrap();
        assert_eq!(buf, [0]);

        let mut buf = Vec::new();
        encode_name(".", &mut buf).unwrap();
        assert_eq!(buf, [0]);
    }

    #[test]
    fn test_encode_name_trailing_dot_is_ignored() {
        let mut with_dot = Vec::new();
        let mut without = Vec::new();
        encode_name("example.org.", &mut with_dot).unwrap();
        encode_name("example.org", &mut without).unwrap();
        assert_eq!(with_dot, without);
    }

    #[test]
    fn test_encode_name_rejects_bad_labels() {
        let mut buf = Vec::new();
        assert!(matches!(
            encode_name("a..b", &mut buf),
            Err(EncodeError::EmptyLabel(_))
        ));
        let long = "x".repeat(64);
        assert!(matches!(
            encode_name(&long, &mut buf),
            Err(EncodeError::LabelTooLong(_))
        ));
    }
}

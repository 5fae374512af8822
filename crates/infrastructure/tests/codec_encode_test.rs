use ferrous_geodns_domain::dns_header::TRUNCATED_FLAG;
use ferrous_geodns_domain::{
    DnsHeader, DnsQuestion, DnsRecord, DnsResponse, RecordClass, RecordType, ResponseCode,
};
use ferrous_geodns_infrastructure::dns::codec::{
    decode_name, encode, encode_response, MAX_PACKET_SIZE,
};
use std::net::Ipv4Addr;

fn question(name: &str, record_type: RecordType) -> DnsQuestion {
    DnsQuestion::new(name, record_type, RecordClass::IN)
}

#[test]
fn test_encode_answer_layout() {
    let header = DnsHeader::response_to(
        &DnsHeader {
            id: 0x1234,
            flags: 0x0100,
            qdcount: 1,
            ..Default::default()
        },
        ResponseCode::NoError,
    );
    let mut response = DnsResponse::new(header, question("a.io", RecordType::A));
    response.add_answer(DnsRecord::new(
        "a.io".to_string(),
        RecordType::A,
        RecordClass::IN,
        50,
        Ipv4Addr::new(192, 0, 2, 1),
    ));

    let bytes = encode_response(&response).unwrap();

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
        0x12, 0x34, 0x81, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
        1, b'a', 2, b'i', b'o', 0, 0x00, 0x01, 0x00, 0x01,
        1, b'a', 2, b'i', b'o', 0, 0x00, 0x01, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x32, 0x00, 0x04, 192, 0, 2, 1,
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn test_encode_refused_has_no_answer_section() {
    let header = DnsHeader::response_to(
        &DnsHeader {
            id: 0xBEEF,
            flags: 0x0100,
            qdcount: 1,
            ..Default::default()
        },
        ResponseCode::Refused,
    );
    let response = DnsResponse::new(header, question("a.io", RecordType::AAAA));

    let bytes = encode_response(&response).unwrap();

    assert_eq!(&bytes[..4], &[0xBE, 0xEF, 0x81, 0x05]);
    assert_eq!(&bytes[4..12], &[0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(bytes.len(), 12 + 6 + 4);
    assert_eq!(&bytes[18..22], &[0x00, 0x1C, 0x00, 0x01]);
}

#[test]
fn test_counts_follow_encoded_sections() {
    let header = DnsHeader {
        id: 1,
        flags: 0x8000,
        qdcount: 9,
        ancount: 9,
        nscount: 9,
        arcount: 9,
    };
    let answers = vec![
        DnsRecord::new(
            "x.y".to_string(),
            RecordType::A,
            RecordClass::IN,
            1,
            Ipv4Addr::new(10, 0, 0, 1),
        );
        2
    ];

    let bytes = encode(&header, &question("x.y", RecordType::A), &answers).unwrap();

    assert_eq!(&bytes[4..12], &[0, 1, 0, 2, 0, 0, 0, 0]);
}

#[test]
fn test_answer_names_are_never_compressed() {
    let header = DnsHeader::response_to(&DnsHeader::default(), ResponseCode::NoError);
    let mut response = DnsResponse::new(header, question("www.cdn-test.space", RecordType::A));
    response.add_answer(DnsRecord::new(
        "www.cdn-test.space".to_string(),
        RecordType::A,
        RecordClass::IN,
        50,
        Ipv4Addr::new(10, 0, 0, 1),
    ));

    let bytes = encode_response(&response).unwrap();
    let answer_at = 12 + 20 + 4;

    assert_eq!(bytes[answer_at], 3, "answer name starts with a label, not a pointer");
    let (name, end) = decode_name(&bytes, answer_at).unwrap();
    assert_eq!(name, "www.cdn-test.space");
    assert_eq!(end, answer_at + 20);
}

#[test]
fn test_encode_rejects_oversized_label() {
    let header = DnsHeader::default();
    let name = format!("{}.io", "q".repeat(64));
    assert!(encode(&header, &question(&name, RecordType::A), &[]).is_err());
}

#[test]
fn test_oversized_reply_is_truncated() {
    // 255 octets on the wire: question plus answer no longer fit in 512.
    let name = format!(
        "{}.{}.{}.{}.cdn-test.space",
        "a".repeat(63),
        "b".repeat(63),
        "c".repeat(63),
        "d".repeat(46)
    );
    let query = DnsHeader {
        id: 0x4242,
        flags: 0x0100,
        qdcount: 1,
        ..Default::default()
    };
    let header = DnsHeader::response_to(&query, ResponseCode::NoError);
    let mut response = DnsResponse::new(header, question(&name, RecordType::A));
    response.add_answer(DnsRecord::new(
        name.clone(),
        RecordType::A,
        RecordClass::IN,
        50,
        Ipv4Addr::new(10, 0, 0, 1),
    ));

    let bytes = encode_response(&response).unwrap();
    let flags = u16::from_be_bytes([bytes[2], bytes[3]]);

    assert!(bytes.len() <= MAX_PACKET_SIZE);
    assert_eq!(bytes.len(), 12 + 255 + 4);
    assert_ne!(flags & TRUNCATED_FLAG, 0);
    assert_eq!(flags & 0x000F, 0);
    assert_eq!(&bytes[0..2], &[0x42, 0x42]);
    assert_eq!(&bytes[4..12], &[0, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(decode_name(&bytes, 12).unwrap().0, name);
}

#[test]
fn test_reply_that_fits_keeps_tc_clear() {
    let header = DnsHeader::response_to(&DnsHeader::default(), ResponseCode::NoError);
    let mut response = DnsResponse::new(header, question("www.cdn-test.space", RecordType::A));
    response.add_answer(DnsRecord::new(
        "www.cdn-test.space".to_string(),
        RecordType::A,
        RecordClass::IN,
        50,
        Ipv4Addr::new(10, 0, 0, 1),
    ));

    let bytes = encode_response(&response).unwrap();
    let flags = u16::from_be_bytes([bytes[2], bytes[3]]);

    assert_eq!(flags & TRUNCATED_FLAG, 0);
    assert_eq!(&bytes[6..8], &[0, 1]);
}

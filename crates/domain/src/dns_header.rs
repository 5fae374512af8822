use crate::dns_record::ResponseCode;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
pub const QR_FLAG: u16 = 1 << 15;
pub const TRUNCATED_FLAG: u16 = 1 << 9;
pub const RECURSION_DESIRED: u16 = 1 << 8;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const RCODE_MASK: u16 = 0x000F;

/// Fixed 12-octet DNS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsHeader {
    pub const SIZE: usize = 12;

    pub fn opcode(&self) -> u8 {
        ((self.flags >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    /// Header for a reply to `query`: ID and every flag bit are echoed, QR is
    /// set, RCODE is overwritten. One question, no answers yet.
    pub fn response_to(query: &DnsHeader, rcode: ResponseCode) -> Self {
        let flags = ((query.flags | QR_FLAG) & !RCODE_MASK) | u16::from(rcode.to_u8());
        Self {
            id: query.id,
            flags,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }
}

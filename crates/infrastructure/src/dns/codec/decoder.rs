use super::errors::DecodeError;
use ferrous_geodns_domain::{DnsHeader, DnsQueryPacket, DnsQuestion, RecordClass, RecordType};

/// Largest datagram accepted on the UDP transport.
pub const MAX_PACKET_SIZE: usize = 512;

const MAX_NAME_WIRE_LEN: usize = 255;
const POINTER_MASK: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;
// Every pointer is two octets, so no legal chain in a query datagram is longer.
const MAX_POINTER_JUMPS: usize = MAX_PACKET_SIZE / 2;

/// Parses the header and exactly one question.
///
/// QDCOUNT is not consulted: the first question is read whatever the count
/// says, and anything after it is ignored.
pub fn decode_query(buf: &[u8]) -> Result<DnsQueryPacket, DecodeError> {
    if buf.len() > MAX_PACKET_SIZE {
        return Err(DecodeError::OversizedPacket {
            len: buf.len(),
            max: MAX_PACKET_SIZE,
        });
    }

    let header = decode_header(buf)?;
    let (name, pos) = decode_name(buf, DnsHeader::SIZE)?;
    let record_type = read_u16(buf, pos)?;
    let record_class = read_u16(buf, pos + 2)?;

    Ok(DnsQueryPacket {
        header,
        question: DnsQuestion::new(
            name,
            RecordType::from_u16(record_type),
            RecordClass::from_u16(record_class),
        ),
        question_end: pos + 4,
    })
}

pub fn decode_header(buf: &[u8]) -> Result<DnsHeader, DecodeError> {
    Ok(DnsHeader {
        id: read_u16(buf, 0)?,
        flags: read_u16(buf, 2)?,
        qdcount: read_u16(buf, 4)?,
        ancount: read_u16(buf, 6)?,
        nscount: read_u16(buf, 8)?,
        arcount: read_u16(buf, 10)?,
    })
}

/// Decodes the name starting at `start`, following compression pointers.
///
/// Accepts buffers of any length, so replies larger than a query can be read
/// back; every pointer target is visited at most once.
///
/// Returns the dotted name (no trailing dot, empty for the root) and the
/// offset just past the name as it appears at `start`: after the first
/// pointer when one was followed, otherwise after the terminating zero.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), DecodeError> {
    let mut name = String::new();
    let mut pos = start;
    let mut resume_at: Option<usize> = None;
    let mut visited = vec![false; buf.len()];
    let mut jumps = 0usize;
    let mut wire_len = 1usize;

    loop {
        let len = *buf.get(pos).ok_or(DecodeError::Truncated { offset: pos })?;

        match len & POINTER_MASK {
            0x00 if len == 0 => {
                pos += 1;
                break;
            }
            0x00 => {
                let len = len as usize;
                let label = buf
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(DecodeError::Truncated { offset: pos + 1 })?;

                wire_len += len + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(DecodeError::NameTooLong);
                }

                let label = std::str::from_utf8(label)
                    .map_err(|_| DecodeError::InvalidLabel { offset: pos })?;
                if label.contains('.') {
                    return Err(DecodeError::InvalidLabel { offset: pos });
                }

                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(label);
                pos += 1 + len;
            }
            POINTER_MASK => {
                let low = *buf
                    .get(pos + 1)
                    .ok_or(DecodeError::Truncated { offset: pos + 1 })?;
                let target = (usize::from(len & POINTER_OFFSET_MASK) << 8) | usize::from(low);

                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                if target >= buf.len() {
                    return Err(DecodeError::Truncated { offset: target });
                }

                jumps += 1;
                if jumps > MAX_POINTER_JUMPS || visited[target] {
                    return Err(DecodeError::PointerCycle { offset: pos });
                }
                visited[target] = true;
                pos = target;
            }
            // 0x40 and 0x80 are reserved label types
            _ => return Err(DecodeError::InvalidLabel { offset: pos }),
        }
    }

    Ok((name, resume_at.unwrap_or(pos)))
}

fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    match buf.get(offset..offset + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(DecodeError::Truncated { offset }),
    }
}

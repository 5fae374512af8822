use std::fmt;

/// Query/record type as carried on the wire.
///
/// Only `A` is ever answered; every other value is kept verbatim so refusals
/// can echo the question unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    CNAME,
    AAAA,
    Other(u16),
}

impl RecordType {
    /// Convert from wire format number (RFC 1035)
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            5 => RecordType::CNAME,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
            RecordType::Other(value) => *value,
        }
    }
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        RecordType::from_u16(value)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::Other(value) => write!(f, "TYPE{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordClass {
    #[default]
    IN,
    Other(u16),
}

impl RecordClass {
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordClass::IN,
            other => RecordClass::Other(other),
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::Other(value) => *value,
        }
    }
}

impl From<u16> for RecordClass {
    fn from(value: u16) -> Self {
        RecordClass::from_u16(value)
    }
}

use std::fmt;

/// RCODE values (RFC 1035 §4.1.1). The classifier emits only `NoError` and
/// `Refused`; the rest exist so decoded headers can be named in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResponseCode {
    NoError = 0,
    FormErr = 1,
    ServFail = 2,
    NxDomain = 3,
    NotImp = 4,
    Refused = 5,
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ResponseCode::NoError),
            1 => Some(ResponseCode::FormErr),
            2 => Some(ResponseCode::ServFail),
            3 => Some(ResponseCode::NxDomain),
            4 => Some(ResponseCode::NotImp),
            5 => Some(ResponseCode::Refused),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

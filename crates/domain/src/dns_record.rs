mod record;
mod record_type;
mod response_code;

pub use record::DnsRecord;
pub use record_type::{RecordClass, RecordType};
pub use response_code::ResponseCode;

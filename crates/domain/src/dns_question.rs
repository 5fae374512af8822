use crate::dns_record::{RecordClass, RecordType};

/// Question entry. `name` is the dotted form without a trailing dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: String,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl DnsQuestion {
    pub fn new(name: impl Into<String>, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            record_class,
        }
    }
}

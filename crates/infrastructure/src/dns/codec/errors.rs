use thiserror::Error;

/// Why an inbound datagram could not be read as a query.
///
/// Every variant is terminal for its packet only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Packet of {len} bytes exceeds the {max}-byte UDP limit")]
    OversizedPacket { len: usize, max: usize },

    #[error("Packet truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("Invalid label at offset {offset}")]
    InvalidLabel { offset: usize },

    #[error("Compression pointer loop detected at offset {offset}")]
    PointerCycle { offset: usize },

    #[error("Domain name exceeds 255 octets")]
    NameTooLong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Label '{0}' exceeds 63 octets")]
    LabelTooLong(String),

    #[error("Domain name '{0}' contains an empty label")]
    EmptyLabel(String),

    #[error("Domain name '{0}' exceeds 255 octets")]
    NameTooLong(String),
}

//! RFC 1035 wire codec for the single-question messages this server handles.
//!
//! Decoding follows compression pointers with an explicit bound; encoding
//! always spells names out in full.

pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod query_builder;

pub use decoder::{decode_header, decode_name, decode_query, MAX_PACKET_SIZE};
pub use encoder::{encode, encode_name, encode_response};
pub use errors::{DecodeError, EncodeError};
pub use query_builder::{build_query, build_random_query};

pub mod codec;
pub mod listener;
pub mod server;

pub use codec::{
    build_query, build_random_query, decode_query, encode, encode_response, DecodeError,
    EncodeError, MAX_PACKET_SIZE,
};
pub use listener::serve_udp;
pub use server::DnsServerHandler;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// SO_RCVBUF for the UDP listener, in bytes
    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_recv_buffer_size() -> usize {
    512 * 1024
}

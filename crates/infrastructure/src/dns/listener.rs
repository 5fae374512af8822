use crate::dns::server::DnsServerHandler;
use std::io;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::error;

// Larger than any accepted packet so oversized datagrams are seen as such.
const RECV_BUFFER_SIZE: usize = 4096;

/// Receives datagrams forever, handling each one on its own task.
///
/// The receive loop never waits on request processing; replies go back on
/// the shared socket to the datagram's source address.
pub async fn serve_udp(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        let (len, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query_buf: Arc<[u8]> = Arc::from(&recv_buf[..len]);
        let handler = Arc::clone(&handler);
        let socket = Arc::clone(&socket);

        // Dual-stack sockets report IPv4 peers as ::ffff:a.b.c.d
        let client_ip = peer.ip().to_canonical();

        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw_udp(&query_buf, client_ip).await {
                if let Err(e) = socket.send_to(&response, peer).await {
                    error!(client = %peer, error = %e, "UDP send error");
                }
            }
        });
    }
}

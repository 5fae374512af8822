use ferrous_geodns_domain::config::ServerConfig;
use ferrous_geodns_infrastructure::dns::{serve_udp, DnsServerHandler};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::info;

pub async fn start_dns_server(
    server: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = server.listen_addr().parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr, server.recv_buffer_size)?);

    info!(bind_address = %socket_addr, "DNS server listening on UDP");

    serve_udp(socket, Arc::new(handler)).await;
    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr, recv_buffer_size: usize) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(recv_buffer_size)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

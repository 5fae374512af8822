use clap::Parser;
use ferrous_geodns_domain::CliOverrides;
use ferrous_geodns_infrastructure::dns::server::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-geodns")]
#[command(version)]
#[command(about = "Ferrous GeoDNS - Authoritative nameserver answering with the nearest edge")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous GeoDNS v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    let services = di::GeoDnsServices::new(&config).await?;
    let handler = DnsServerHandler::new(services.handler_use_case);

    tokio::select! {
        result = server::start_dns_server(&config.server, handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!("Server shutdown complete");
    Ok(())
}

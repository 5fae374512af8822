use ferrous_geodns_domain::config::LogFormat;
use ferrous_geodns_domain::Config;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

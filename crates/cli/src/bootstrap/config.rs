use ferrous_geodns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up.
pub fn log_config_summary(path: Option<&str>, config: &Config) {
    let source = path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "defaults".to_string());

    info!(
        source = %source,
        apex = %config.zone.apex_name(),
        origin = %config.zone.origin_name(),
        origin_ip = %config.zone.origin_ip,
        ttl = config.zone.ttl,
        edges = config.edge.servers.len(),
        networks = config.geolocation.networks.len(),
        geo_timeout_ms = config.geolocation.timeout_ms,
        "Configuration loaded"
    );
}

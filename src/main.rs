//! airweather - an in-memory airport weather collector and query server
//!
//! This is the main entry point for the airweather application.

use anyhow::Context;
use std::net::SocketAddr;
use tracing::info;

use airweather::loader::{default_airports, load_airports, seed};
use airweather::{build_router, init_tracing, server, Config, WeatherService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.log_level);

    info!("Starting airweather v{}", env!("CARGO_PKG_VERSION"));

    let service = WeatherService::new_shared();

    let added = match &config.data.airports_file {
        Some(path) => {
            info!("Loading airports from {:?}", path);
            let airports = load_airports(path)
                .with_context(|| format!("Failed to load airports from {}", path.display()))?;
            seed(&service, &airports, &path.display().to_string())
        }
        None => seed(&service, &default_airports(), "built-in"),
    };
    info!("Serving weather for {} airports", added);

    let app = build_router(service);

    let host = config
        .server
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid host address: {}", config.server.host))?;
    let addr = SocketAddr::from((host, config.server.port));

    let listener = server::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    server::serve(listener, app, server::shutdown_signal()).await?;

    info!("Server has been gracefully shut down");
    Ok(())
}

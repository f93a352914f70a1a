//! Fundraising Total Proxy
//!
//! Single-endpoint caching proxy in front of a fundraising API.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────────┐
//!                        │              FUNDRAISING PROXY                │
//!   Browser request      │  ┌─────────┐    ┌──────────────────────────┐  │
//!   ─────────────────────┼─▶│  http   │───▶│   ProxyCacheHandler      │  │
//!                        │  │ server  │    │  cache hit ──▶ bytes     │  │
//!                        │  └─────────┘    │  cache miss ─┐           │  │
//!                        │       ▲         └──────────────┼───────────┘  │
//!   JSON / text error    │       │                        ▼              │   Fundraising
//!   ◀────────────────────┼───────┘               ┌──────────────┐        │      API
//!                        │                       │  upstream    │◀───────┼──────────
//!                        │                       │  client      │        │
//!                        │                       └──────────────┘        │
//!                        └───────────────────────────────────────────────┘
//! ```

use clap::Parser;

use fundraising_proxy::config::{Cli, ProxyConfig};
use fundraising_proxy::http::HttpServer;
use fundraising_proxy::lifecycle::{bind_listener, Shutdown};
use fundraising_proxy::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ProxyConfig::from_cli(&cli);

    logging::init_tracing(&config.observability.log_filter);

    tracing::info!("fundraising-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        port = %config.listener.port,
        address = %listener.local_addr()?,
        "Proxy server is running"
    );

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

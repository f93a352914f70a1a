//! Command-line interface.

use clap::Parser;

use crate::config::schema::ProxyConfig;

#[derive(Debug, Parser)]
#[command(name = "fundraising-proxy")]
#[command(version, about = "Caching proxy for a fundraising total", long_about = None)]
pub struct Cli {
    /// Port to run the proxy server on (numeric, 1-65535; service names and 0 are rejected)
    #[arg(long, default_value = "8080")]
    pub port: String,
}

impl ProxyConfig {
    /// Build the runtime configuration from parsed command-line flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        config.listener.port = cli.port.clone();
        config
    }
}

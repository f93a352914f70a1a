//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! Defaults carry the production values; the command line only overrides
//! the listen port.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the fundraising proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Upstream fundraising API settings.
    pub upstream: UpstreamConfig,

    /// Response cache settings.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind on. The default `0.0.0.0` accepts IPv4 only.
    pub host: String,

    /// TCP port, kept as text the way it arrives on the command line.
    pub port: String,
}

impl ListenerConfig {
    /// Socket address string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: "8080".to_string(),
        }
    }
}

/// Upstream fundraising API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Endpoint returning the fundraising action.
    pub url: String,

    /// Header the upstream uses for tenant identification.
    pub site_id_header: String,

    /// Value sent in `site_id_header`.
    pub site_id: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "https://frontend-api.kentaa.nl/actions/SkoDxEDZQJRV".to_string(),
            site_id_header: "x-site-id".to_string(),
            site_id: "LqS5hWxATJhq".to_string(),
        }
    }
}

/// Response cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a transformed payload stays fresh, in milliseconds.
    pub ttl_ms: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_ms: 5_000 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "fundraising_proxy=info,tower_http=info".to_string(),
        }
    }
}

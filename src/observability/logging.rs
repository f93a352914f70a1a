//! Structured logging.
//!
//! Uses `tracing` with a `tracing-subscriber` registry. The filter comes from
//! `RUST_LOG` when set, otherwise from the configured default directive.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter, preferring `RUST_LOG` over `default_filter`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

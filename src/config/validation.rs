//! Semantic validation of a loaded configuration.

use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listen port {0:?}: expected 1-65535")]
    InvalidPort(String),

    #[error("invalid upstream url {url:?}: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("invalid upstream header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid upstream header value for {0:?}")]
    InvalidHeaderValue(String),

    #[error("cache ttl must be greater than zero")]
    ZeroCacheTtl,
}

/// Check the configuration, collecting every error rather than stopping at the first.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.listener.port.parse::<u16>() {
        Ok(0) | Err(_) => errors.push(ValidationError::InvalidPort(config.listener.port.clone())),
        Ok(_) => {}
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: upstream.url.clone(),
            reason: format!("unsupported scheme {}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    if HeaderName::from_bytes(upstream.site_id_header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeaderName(upstream.site_id_header.clone()));
    }
    if HeaderValue::from_str(&upstream.site_id).is_err() {
        errors.push(ValidationError::InvalidHeaderValue(upstream.site_id_header.clone()));
    }

    if config.cache.ttl_ms == 0 {
        errors.push(ValidationError::ZeroCacheTtl);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

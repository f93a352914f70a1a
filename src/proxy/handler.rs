//! Cache-check, upstream refresh and cache-update for one request.

use axum::body::Bytes;
use std::time::{Duration, Instant};

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::observability::metrics;
use crate::proxy::cache::ResponseCache;
use crate::proxy::types::ProxyResult;
use crate::upstream::UpstreamClient;

/// Where a served payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Cache,
    Upstream,
}

/// Answers data requests from the cache when fresh, otherwise from the upstream.
///
/// Concurrent misses are not coalesced: each one issues its own upstream fetch
/// and the last cache write wins.
#[derive(Debug)]
pub struct ProxyCacheHandler {
    cache: ResponseCache,
    upstream: UpstreamClient,
    ttl: Duration,
}

impl ProxyCacheHandler {
    /// Create a handler with an empty cache.
    pub fn new(upstream: UpstreamClient, ttl: Duration) -> Self {
        Self {
            cache: ResponseCache::new(),
            upstream,
            ttl,
        }
    }

    /// Create a handler talking to the configured upstream.
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self::new(UpstreamClient::new(&config.upstream), config.cache.ttl())
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Produce the JSON payload for a data request.
    pub async fn payload(&self) -> Result<(Bytes, PayloadSource), ProxyError> {
        if let Some(body) = self.cache.get() {
            metrics::record_cache_lookup(true);
            return Ok((body, PayloadSource::Cache));
        }
        metrics::record_cache_lookup(false);

        // The cache lock is released here; the fetch runs without it.
        let record = self.upstream.fetch().await?;
        let body = ProxyResult::from(record).to_bytes()?;

        let expires_at = Instant::now() + self.ttl;
        self.cache.set(body.clone(), expires_at);

        tracing::info!(
            upstream = %self.upstream.url(),
            ttl = ?self.ttl,
            "Cache refreshed from upstream"
        );

        Ok((body, PayloadSource::Upstream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    fn unreachable_handler() -> ProxyCacheHandler {
        let config = UpstreamConfig {
            url: "http://127.0.0.1:1/".to_string(),
            ..UpstreamConfig::default()
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        ProxyCacheHandler::new(
            UpstreamClient::with_http_client(&config, http),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_fresh_cache_served_without_upstream() {
        let handler = unreachable_handler();
        let body = Bytes::from_static(br#"{"target_amount":1,"total_amount":"2"}"#);
        handler.cache().set(body.clone(), Instant::now() + Duration::from_secs(60));

        let (served, source) = handler.payload().await.unwrap();
        assert_eq!(served, body);
        assert_eq!(source, PayloadSource::Cache);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_untouched() {
        let handler = unreachable_handler();
        let stale_expiry = Instant::now() - Duration::from_millis(1);
        handler.cache().set(Bytes::from_static(b"old"), stale_expiry);

        let err = handler.payload().await.unwrap_err();
        assert!(matches!(err, ProxyError::UpstreamTransport(_)));
        assert_eq!(handler.cache().expires_at(), Some(stale_expiry));
        assert_eq!(
            handler.cache().get_at(stale_expiry - Duration::from_millis(1)).as_deref(),
            Some(&b"old"[..])
        );
    }
}

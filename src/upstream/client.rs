//! Outbound client for the fundraising API.

use axum::body::Bytes;
use std::time::Instant;

use crate::config::UpstreamConfig;
use crate::error::ProxyError;
use crate::observability::metrics;
use crate::upstream::types::{UpstreamEnvelope, UpstreamRecord};

/// Fetches and decodes the fundraising action from the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: String,
    site_id_header: String,
    site_id: String,
}

impl UpstreamClient {
    /// Create a client using a default `reqwest` connection pool.
    ///
    /// No request timeout is set; a slow upstream holds only the request that
    /// triggered the fetch.
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a caller-provided `reqwest::Client`.
    pub fn with_http_client(config: &UpstreamConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            url: config.url.clone(),
            site_id_header: config.site_id_header.clone(),
            site_id: config.site_id.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET to the upstream and decode its body.
    pub async fn fetch(&self) -> Result<UpstreamRecord, ProxyError> {
        let start = Instant::now();
        let result = self.fetch_inner().await;
        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_upstream_fetch(outcome, start);
        result
    }

    async fn fetch_inner(&self) -> Result<UpstreamRecord, ProxyError> {
        let request = self
            .client
            .get(&self.url)
            .header(self.site_id_header.as_str(), self.site_id.as_str())
            .build()
            .map_err(ProxyError::RequestBuild)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ProxyError::UpstreamTransport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %self.url,
                status = %status,
                "Upstream returned non-success status"
            );
        }

        let body: Bytes = response.bytes().await.map_err(ProxyError::UpstreamBody)?;
        let envelope = UpstreamEnvelope::from_slice(&body).map_err(ProxyError::UpstreamParse)?;

        tracing::debug!(
            status = %status,
            bytes = body.len(),
            "Upstream body decoded"
        );

        Ok(envelope.data)
    }
}

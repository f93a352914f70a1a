//! Metrics collection.
//!
//! # Metrics
//! - `proxy_requests_total` (counter): inbound requests by method, status
//! - `proxy_request_duration_seconds` (histogram): inbound latency
//! - `proxy_cache_lookups_total` (counter): cache lookups by result (hit/miss)
//! - `proxy_upstream_fetches_total` (counter): upstream fetches by outcome
//! - `proxy_upstream_fetch_duration_seconds` (histogram): upstream latency

use metrics::{counter, histogram};
use std::time::Instant;

/// Record a completed inbound request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "proxy_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("proxy_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a cache lookup on the data path.
pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("proxy_cache_lookups_total", "result" => result).increment(1);
}

/// Record one upstream fetch attempt.
pub fn record_upstream_fetch(outcome: &'static str, start: Instant) {
    counter!("proxy_upstream_fetches_total", "outcome" => outcome).increment(1);
    histogram!("proxy_upstream_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
}

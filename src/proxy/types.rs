//! Proxied output shape.

use axum::body::Bytes;
use serde::Serialize;

use crate::error::ProxyError;
use crate::upstream::UpstreamRecord;

/// What browser clients receive: the two upstream figures and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyResult {
    pub target_amount: i64,
    pub total_amount: String,
}

impl From<UpstreamRecord> for ProxyResult {
    fn from(record: UpstreamRecord) -> Self {
        Self {
            target_amount: record.target_amount,
            total_amount: record.total_amount,
        }
    }
}

impl ProxyResult {
    /// Serialize to the compact JSON bytes that get cached and served.
    pub fn to_bytes(&self) -> Result<Bytes, ProxyError> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(ProxyError::Serialize)
    }
}

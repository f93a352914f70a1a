//! Request-path error taxonomy.
//!
//! Every variant is terminal for the request that produced it. None of them
//! touch the response cache and none are fatal to the process.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while producing a proxied payload.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The outbound request could not be constructed.
    #[error("failed to build upstream request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    /// DNS, connect, TLS or protocol failure talking to the upstream.
    #[error("upstream transport error: {0}")]
    UpstreamTransport(#[source] reqwest::Error),

    /// The connection dropped while the body was being read.
    #[error("failed to read upstream body: {0}")]
    UpstreamBody(#[source] reqwest::Error),

    /// The body is not the JSON shape the upstream is expected to send.
    #[error("failed to parse upstream body: {0}")]
    UpstreamParse(#[source] serde_json::Error),

    /// The transformed result could not be serialized.
    #[error("failed to serialize proxy result: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ProxyError {
    /// HTTP status reported to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::UpstreamTransport(_) => StatusCode::BAD_GATEWAY,
            ProxyError::RequestBuild(_)
            | ProxyError::UpstreamBody(_)
            | ProxyError::UpstreamParse(_)
            | ProxyError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Generic plain-text message sent to the client. Source details are only logged.
    pub fn public_message(&self) -> &'static str {
        match self {
            ProxyError::RequestBuild(_) => "Error creating request",
            ProxyError::UpstreamTransport(_) => "Error fetching remote data",
            ProxyError::UpstreamBody(_) => "Error reading response",
            ProxyError::UpstreamParse(_) => "Error parsing upstream JSON",
            ProxyError::Serialize(_) => "Error creating response JSON",
        }
    }

    /// Short label used for log fields and metric outcomes.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::RequestBuild(_) => "request_build",
            ProxyError::UpstreamTransport(_) => "transport",
            ProxyError::UpstreamBody(_) => "body_read",
            ProxyError::UpstreamParse(_) => "parse",
            ProxyError::Serialize(_) => "serialize",
        }
    }
}

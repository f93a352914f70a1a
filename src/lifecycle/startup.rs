//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration before anything binds
//! - Bind the listening socket
//!
//! # Design Decisions
//! - Fail fast: both steps are fatal to the process
//! - Nothing after a successful bind can bring the process down

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, ProxyConfig, ValidationError};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate `config` and bind its listener.
pub async fn bind_listener(config: &ProxyConfig) -> Result<TcpListener, StartupError> {
    validate_config(config).map_err(StartupError::Config)?;

    let address = config.listener.bind_address();
    let bound = TcpListener::bind(&address).await;
    bound.map_err(|source| StartupError::Bind { address, source })
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (--port)
//!     → cli.rs (clap parse)
//!     → schema.rs defaults + port override
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable for the process lifetime
//! - Upstream URL, site id and cache TTL are compiled-in defaults
//! - Validation separates syntactic (clap/serde) from semantic checks

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{CacheConfig, ListenerConfig, ObservabilityConfig, ProxyConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};

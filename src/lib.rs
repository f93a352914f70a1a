//! Fundraising total proxy library.
//!
//! Serves `{"target_amount", "total_amount"}` from a third-party fundraising
//! API to browser clients, with a short-lived in-memory cache in front of
//! the upstream.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use proxy::ProxyCacheHandler;

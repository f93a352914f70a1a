//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned or kept)
//!     → proxy handler: OPTIONS → empty 200
//!                      other  → ProxyCacheHandler::payload
//!     → response.rs (JSON payload or plain-text error)
//!     → CORS headers added by layer
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

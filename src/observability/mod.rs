//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path produces:
//!     → logging.rs (structured tracing events, request id fields)
//!     → metrics.rs (counters and histograms via the `metrics` facade)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//!     → whichever metrics recorder the embedding binary installs
//! ```
//!
//! # Design Decisions
//! - Log verbosity from config default, overridable with RUST_LOG
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;

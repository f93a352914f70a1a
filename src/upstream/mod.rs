//! Upstream fundraising API.
//!
//! # Data Flow
//! ```text
//! ProxyCacheHandler (cache miss)
//!     → client.rs (GET <url> with site id header)
//!     → raw body bytes
//!     → types.rs (UpstreamEnvelope → UpstreamRecord)
//! ```
//!
//! # Design Decisions
//! - No retries, no explicit deadline on the outbound call
//! - Non-2xx statuses are not errors by themselves; the body decides
//! - `total_amount` stays a string end to end

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{UpstreamEnvelope, UpstreamRecord};

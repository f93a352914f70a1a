//! Proxy Cache Handler.
//!
//! # Data Flow
//! ```text
//! data request
//!     → cache.rs get()            (lock held for one read)
//!         hit  → cached bytes
//!         miss → upstream fetch    (no lock held)
//!              → types.rs ProxyResult → JSON bytes
//!              → cache.rs set()    (lock held for one write)
//!              → fresh bytes
//! ```
//!
//! # Design Decisions
//! - Cache holds the serialized bytes, so hits are a clone of a `Bytes`
//! - A failed refresh never touches the cache
//! - No background refresh and no request collapsing

pub mod cache;
pub mod handler;
pub mod types;

pub use cache::{CachedPayload, ResponseCache};
pub use handler::{PayloadSource, ProxyCacheHandler};
pub use types::ProxyResult;

//! Single-slot response cache.

use axum::body::Bytes;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

/// The last successfully transformed response and when it stops being fresh.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub body: Bytes,
    pub expires_at: Instant,
}

impl CachedPayload {
    /// Fresh while `now` is strictly before the expiry.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Thread-safe holder for at most one [`CachedPayload`].
///
/// Every operation takes the lock for a single memory read or write. The lock
/// is never held across an await point, so readers never wait on network I/O.
#[derive(Debug, Default)]
pub struct ResponseCache {
    slot: Mutex<Option<CachedPayload>>,
}

impl ResponseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached body if it is still fresh.
    pub fn get(&self) -> Option<Bytes> {
        self.get_at(Instant::now())
    }

    /// Return the cached body if it is fresh at `now`.
    pub fn get_at(&self, now: Instant) -> Option<Bytes> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|payload| payload.is_fresh_at(now))
            .map(|payload| payload.body.clone())
    }

    /// Replace the cached payload. Last writer wins, even if its expiry is earlier.
    pub fn set(&self, body: Bytes, expires_at: Instant) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CachedPayload { body, expires_at });
    }

    /// Expiry of the stored payload, fresh or not.
    pub fn expires_at(&self) -> Option<Instant> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|payload| payload.expires_at)
    }
}

//! Memoising provider wrapper.
//!
//! Wraps any `EphemerisProvider` and remembers `(instant, body)` lookups.
//! The design-date solver asks for the Sun at the birth instant once per
//! chart; composite views recompute the same charts repeatedly, so a shared
//! cache in front of a slow provider pays off.
//!
//! ## Limitations
//!
//! - **Exact keys only**: instants are keyed by their bit pattern, so two
//!   instants a nanosecond apart are distinct entries.
//! - **Unbounded**: call `clear()` if the process computes many charts.
//! - **Errors are not cached**: a failing lookup is retried on the next call.

use std::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;
use parking_lot::RwLock;
use serde::Serialize;

use super::{Body, EphemerisProvider, JulianDay};
use crate::Result;

/// Hit/miss counters since construction or the last `clear()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

pub struct CachingEphemeris<P> {
    inner: P,
    entries: RwLock<HashMap<(u64, Body), f64>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<P: EphemerisProvider> CachingEphemeris<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().len(),
        }
    }

    /// Drop all cached longitudes and reset the counters.
    pub fn clear(&self) {
        self.entries.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl<P: EphemerisProvider> EphemerisProvider for CachingEphemeris<P> {
    fn longitude(&self, at: JulianDay, body: Body) -> Result<f64> {
        let key = (at.0.to_bits(), body);
        if let Some(&lon) = self.entries.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(lon);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let lon = self.inner.longitude(at, body)?;
        self.entries.write().insert(key, lon);
        Ok(lon)
    }
}

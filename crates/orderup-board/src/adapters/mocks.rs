//! Test doubles for the outbound ports.
//!
//! Public (not `#[cfg(test)]`) so the workspace test suite can drive
//! deterministic TTL scenarios against the service.

use crate::domain::Timestamp;
use crate::ports::outbound::{Chime, TimeSource};
use std::io;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Manually driven clock for testing.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and advance time after handing another to the service.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock set to `initial` milliseconds.
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }

    /// Sets the clock to an absolute time.
    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

/// No-op chime for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn ring(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Chime that counts rings instead of making noise.
#[derive(Debug, Clone, Default)]
pub struct CountingChime {
    rings: Arc<AtomicUsize>,
}

impl CountingChime {
    /// Creates a new counting chime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the chime rang.
    pub fn ring_count(&self) -> usize {
        self.rings.load(Ordering::SeqCst)
    }
}

impl Chime for CountingChime {
    fn ring(&self) -> io::Result<()> {
        self.rings.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Chime that always fails, for exercising the best-effort path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingChime;

impl Chime for FailingChime {
    fn ring(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no audio device"))
    }
}

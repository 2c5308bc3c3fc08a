//! Outbound (Driven) ports for the pickup board.
//!
//! These traits define the two effects the board depends on: reading the
//! clock and ringing the notification chime.

use crate::domain::Timestamp;
use std::io;

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Audio cue for a freshly posted order.
///
/// Ringing is best-effort by contract: the service logs a failure and
/// moves on, it never fails the add.
pub trait Chime: Send + Sync {
    /// Rings the chime once.
    fn ring(&self) -> io::Result<()>;
}

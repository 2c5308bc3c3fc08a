//! Value objects for the pickup board.

use super::entities::Timestamp;

/// Snapshot of board health at a point in time.
///
/// Derived, not stored: computed against a caller-supplied `now` so the
/// same board state yields consistent numbers within one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardStatus {
    /// Number of orders currently on the board.
    pub active: usize,
    /// Age of the oldest order (ms), zero when empty.
    pub oldest_age_ms: u64,
    /// Milliseconds until the next eviction, `None` when empty.
    pub next_expiry_ms: Option<Timestamp>,
}

impl BoardStatus {
    /// Returns true when nothing is waiting for pickup.
    pub fn is_idle(&self) -> bool {
        self.active == 0
    }
}

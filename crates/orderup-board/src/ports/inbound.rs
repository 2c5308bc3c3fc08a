//! # Inbound Port - BoardApi
//!
//! Primary driving port exposing the pickup board API. The terminal
//! front-end is the expected caller, but anything able to hold a mutable
//! handle (tests, a future remote surface) drives the board the same way.

use crate::domain::{BoardError, BoardStatus, Order, OrderId};

/// Primary API for the pickup board.
///
/// Implementations own the wall clock and the audio cue; callers never
/// pass time in. That keeps the front-end free of time arithmetic and the
/// TTL behavior testable through a manual clock.
pub trait BoardApi: Send + Sync {
    /// Posts an order under the given customer name.
    ///
    /// The name is trimmed and uppercased. On success the audio cue fires
    /// (best-effort) when sound is enabled.
    ///
    /// # Errors
    /// - `EmptyName`: empty or whitespace-only name
    /// - `NameTooLong`: trimmed name exceeds the configured limit
    /// - `BoardFull`: board at capacity
    fn add_order(&mut self, name: &str) -> Result<OrderId, BoardError>;

    /// Removes an order by id, returning it if it was present.
    ///
    /// Removing an absent id is a no-op.
    fn remove_order(&mut self, id: OrderId) -> Option<Order>;

    /// Evicts every order whose age has reached the TTL.
    ///
    /// Should be called on a one-second cadence. Returns the evicted
    /// orders so the caller can announce them.
    fn sweep(&mut self) -> Vec<Order>;

    /// Seconds until `order` is evicted, rounded up, floored at zero.
    fn remaining_secs(&self, order: &Order) -> u64;

    /// Flips the audio cue gate, returning the new state.
    ///
    /// Not persisted; a restart comes back with the configured default.
    fn toggle_sound(&mut self) -> bool;

    /// Returns true when the audio cue is enabled.
    fn sound_enabled(&self) -> bool;

    /// Returns the orders in arrival order, oldest first.
    fn orders(&self) -> &[Order];

    /// Gets the current board status.
    fn status(&self) -> BoardStatus;

    /// Gets the number of orders on the board.
    fn len(&self) -> usize;

    /// Returns true if the board is empty.
    fn is_empty(&self) -> bool;
}

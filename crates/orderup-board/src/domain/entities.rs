//! Core domain entities for the pickup board.
//!
//! Defines the order lifecycle types: an order is posted when food is ready,
//! sits on the board, and is cleared manually or evicted once its age
//! reaches the TTL.

use std::fmt;

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Unique order identifier, derived from the creation time in milliseconds.
///
/// Allocation is monotonic (`max(now_ms, last_id + 1)`), so two orders
/// posted in the same millisecond still get distinct, increasing ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(u64);

impl OrderId {
    /// Wraps a raw millisecond-derived id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Short display form (last four digits), for tight UI columns.
    pub fn short(&self) -> String {
        format!("{:04}", self.0 % 10_000)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// An order waiting on the pickup board.
///
/// The name is stored trimmed and uppercased; `OrderBoard::add` performs
/// the normalization before construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Unique identifier.
    pub id: OrderId,
    /// Customer display name (trimmed, uppercase).
    pub name: String,
    /// Timestamp when the order was posted (ms).
    pub ready_at: Timestamp,
}

impl Order {
    /// Creates a new order. Expects an already-normalized name.
    pub fn new(id: OrderId, name: String, ready_at: Timestamp) -> Self {
        Self { id, name, ready_at }
    }

    /// Age of the order at `now`, in milliseconds.
    pub fn age_ms(&self, now: Timestamp) -> u64 {
        now.saturating_sub(self.ready_at)
    }

    /// Checks whether the order has reached its eviction age.
    pub fn is_expired(&self, now: Timestamp, ttl_ms: u64) -> bool {
        self.age_ms(now) >= ttl_ms
    }

    /// Milliseconds until eviction, floored at zero.
    pub fn remaining_ms(&self, now: Timestamp, ttl_ms: u64) -> u64 {
        ttl_ms.saturating_sub(self.age_ms(now))
    }

    /// Seconds until eviction, rounded up, floored at zero.
    ///
    /// Ceiling rounding keeps a live order from ever displaying `0s`;
    /// the sweep removes it at or before the moment it would.
    pub fn remaining_secs(&self, now: Timestamp, ttl_ms: u64) -> u64 {
        self.remaining_ms(now, ttl_ms).div_ceil(1000)
    }
}

/// Board configuration.
///
/// The TTL is the product constant (two minutes); the capacity bounds are
/// memory hygiene for a screen that physically fits a few dozen tiles.
#[derive(Clone, Debug)]
pub struct BoardConfig {
    /// Time-to-live for an order (milliseconds).
    pub ttl_ms: u64,
    /// Maximum orders on the board.
    pub max_orders: usize,
    /// Maximum customer name length (characters).
    pub max_name_len: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 120_000, // 2 minutes
            max_orders: 60,
            max_name_len: 32,
        }
    }
}

impl BoardConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            ttl_ms: 2_000, // 2 seconds
            max_orders: 8,
            max_name_len: 16,
        }
    }
}

//! # Order Board - Time-Decaying Pickup List
//!
//! Implements the core board data structure: an arrival-ordered list of
//! orders with validated insertion and a TTL eviction sweep.
//!
//! ## Invariants Enforced
//!
//! - Names are stored trimmed and uppercased (normalized in `add()`)
//! - Ids are unique and strictly increasing (`next_id()` monotonic allocator)
//! - No order survives a sweep once its age has reached the TTL (`sweep()`)
//! - Arrival order is preserved; survivors keep their relative order

use super::entities::{BoardConfig, Order, OrderId, Timestamp};
use super::errors::BoardError;
use super::value_objects::BoardStatus;

/// Arrival-ordered order list with TTL eviction.
///
/// A `Vec` is the right structure here: the board is bounded to what fits
/// on one screen, display order is arrival order, and every operation is a
/// short scan.
#[derive(Debug)]
pub struct OrderBoard {
    /// Configuration.
    config: BoardConfig,

    /// Orders in arrival order, oldest first.
    orders: Vec<Order>,

    /// High-water mark for id allocation.
    last_id: u64,
}

impl OrderBoard {
    /// Creates a new empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            orders: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a board with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BoardConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the number of orders on the board.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if the board is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns the orders in arrival order, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Gets an order by id.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Checks if an order is on the board.
    pub fn contains(&self, id: OrderId) -> bool {
        self.get(id).is_some()
    }

    /// Posts an order to the board.
    ///
    /// The name is trimmed and uppercased before storage.
    ///
    /// # Errors
    /// - `EmptyName` if the name is empty or whitespace-only
    /// - `NameTooLong` if the trimmed name exceeds the configured limit
    /// - `BoardFull` if the board is at capacity
    pub fn add(&mut self, name: &str, now: Timestamp) -> Result<OrderId, BoardError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyName);
        }

        let len = trimmed.chars().count();
        if len > self.config.max_name_len {
            return Err(BoardError::NameTooLong {
                len,
                max: self.config.max_name_len,
            });
        }

        if self.orders.len() >= self.config.max_orders {
            return Err(BoardError::BoardFull {
                capacity: self.config.max_orders,
            });
        }

        let id = self.next_id(now);
        self.orders.push(Order::new(id, trimmed.to_uppercase(), now));
        Ok(id)
    }

    /// Allocates the next id: the current time in ms, bumped past the
    /// previous id so same-millisecond posts stay unique.
    fn next_id(&mut self, now: Timestamp) -> OrderId {
        let raw = now.max(self.last_id + 1);
        self.last_id = raw;
        OrderId::new(raw)
    }

    /// Removes an order by id, returning it if present.
    ///
    /// Removing an id that is not on the board is a no-op.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(index))
    }

    /// Evicts every order whose age has reached the TTL.
    ///
    /// Returns the evicted orders in arrival order so callers can log and
    /// announce them.
    pub fn sweep(&mut self, now: Timestamp) -> Vec<Order> {
        let ttl_ms = self.config.ttl_ms;

        let expired: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.is_expired(now, ttl_ms))
            .cloned()
            .collect();

        self.orders.retain(|o| !o.is_expired(now, ttl_ms));

        expired
    }

    /// Seconds until `order` is evicted, rounded up, floored at zero.
    pub fn remaining_secs(&self, order: &Order, now: Timestamp) -> u64 {
        order.remaining_secs(now, self.config.ttl_ms)
    }

    /// Gets the board status.
    pub fn status(&self, now: Timestamp) -> BoardStatus {
        let oldest_age_ms = self
            .orders
            .iter()
            .map(|o| o.age_ms(now))
            .max()
            .unwrap_or(0);

        let next_expiry_ms = self
            .orders
            .iter()
            .map(|o| o.remaining_ms(now, self.config.ttl_ms))
            .min();

        BoardStatus {
            active: self.orders.len(),
            oldest_age_ms,
            next_expiry_ms,
        }
    }
}

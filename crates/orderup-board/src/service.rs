//! # Board Service
//!
//! Application service layer that implements the `BoardApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal application service that:
//! - Implements the inbound port (`BoardApi`)
//! - Uses the outbound ports (`TimeSource`, `Chime`)
//! - Delegates the list rules to the domain layer
//! - Owns the sound gate the chime sits behind

use tracing::{debug, info, warn};

use crate::adapters::TerminalBell;
use crate::domain::{BoardConfig, BoardError, BoardStatus, Order, OrderBoard, OrderId};
use crate::ports::inbound::BoardApi;
use crate::ports::outbound::{Chime, SystemTimeSource, TimeSource};

/// Pickup board service.
///
/// Reads the clock once per operation and hands the timestamp to the
/// domain, so one operation never sees two different values of `now`.
pub struct BoardService {
    board: OrderBoard,
    clock: Box<dyn TimeSource>,
    chime: Box<dyn Chime>,
    sound_enabled: bool,
}

impl BoardService {
    /// Creates a service over explicit clock and chime implementations.
    ///
    /// Sound starts enabled; see [`BoardService::with_sound`].
    pub fn new(config: BoardConfig, clock: Box<dyn TimeSource>, chime: Box<dyn Chime>) -> Self {
        Self {
            board: OrderBoard::new(config),
            clock,
            chime,
            sound_enabled: true,
        }
    }

    /// Creates a production service: system clock, terminal bell.
    pub fn with_defaults(config: BoardConfig) -> Self {
        Self::new(config, Box::new(SystemTimeSource), Box::new(TerminalBell))
    }

    /// Sets the initial sound gate state.
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Returns the board configuration.
    pub fn config(&self) -> &BoardConfig {
        self.board.config()
    }

    /// Rings the chime if the gate is open. Failures are logged and
    /// swallowed, never surfaced to the caller.
    fn ring_chime(&self) {
        if !self.sound_enabled {
            return;
        }
        if let Err(e) = self.chime.ring() {
            debug!("chime failed: {}", e);
        }
    }
}

impl BoardApi for BoardService {
    fn add_order(&mut self, name: &str) -> Result<OrderId, BoardError> {
        let now = self.clock.now();
        match self.board.add(name, now) {
            Ok(id) => {
                if let Some(order) = self.board.get(id) {
                    info!("order {} posted: {}", id, order.name);
                }
                self.ring_chime();
                Ok(id)
            }
            Err(e) => {
                match &e {
                    BoardError::EmptyName => debug!("ignored blank order name"),
                    BoardError::NameTooLong { len, max } => {
                        debug!("rejected order name: {} chars (max {})", len, max);
                    }
                    BoardError::BoardFull { capacity } => {
                        warn!("board full at {} orders", capacity);
                    }
                }
                Err(e)
            }
        }
    }

    fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        let removed = self.board.remove(id);
        match &removed {
            Some(order) => info!("order {} cleared: {}", order.id, order.name),
            None => debug!("remove ignored, order {} not on board", id),
        }
        removed
    }

    fn sweep(&mut self) -> Vec<Order> {
        let now = self.clock.now();
        let evicted = self.board.sweep(now);
        for order in &evicted {
            info!(
                "order {} expired after {}s: {}",
                order.id,
                order.age_ms(now) / 1000,
                order.name
            );
        }
        evicted
    }

    fn remaining_secs(&self, order: &Order) -> u64 {
        self.board.remaining_secs(order, self.clock.now())
    }

    fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        info!("sound {}", if self.sound_enabled { "on" } else { "off" });
        self.sound_enabled
    }

    fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    fn orders(&self) -> &[Order] {
        self.board.orders()
    }

    fn status(&self) -> BoardStatus {
        self.board.status(self.clock.now())
    }

    fn len(&self) -> usize {
        self.board.len()
    }

    fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

//! Adapters layer for the pickup board.
//!
//! Concrete implementations of the outbound ports: the production terminal
//! bell plus public test doubles for clock and chime.

pub mod bell;
pub mod mocks;

pub use bell::TerminalBell;
pub use mocks::{CountingChime, FailingChime, ManualClock, SilentChime};

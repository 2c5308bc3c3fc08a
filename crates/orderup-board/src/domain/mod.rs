//! # Domain Layer - Pickup Board
//!
//! Pure business logic: no clock, no terminal, no logging. Time always
//! arrives as a caller-supplied `Timestamp` so every rule is deterministic
//! under test.
//!
//! ## Components
//!
//! - `entities`: Order, OrderId, Timestamp, BoardConfig
//! - `board`: OrderBoard with validated add and TTL eviction sweep
//! - `value_objects`: BoardStatus read model
//! - `errors`: BoardError enumeration

pub mod board;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use board::*;
pub use entities::*;
pub use errors::*;
pub use value_objects::*;

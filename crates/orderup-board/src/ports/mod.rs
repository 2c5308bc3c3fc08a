//! Ports layer for the pickup board.
//!
//! Defines the hexagonal architecture port traits:
//! - Inbound (Driving) ports: API exposed to front-ends
//! - Outbound (Driven) ports: clock and chime dependencies

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

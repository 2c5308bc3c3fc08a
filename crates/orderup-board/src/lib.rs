//! # OrderUp Board
//!
//! In-memory pickup board: staff post a customer name when an order is
//! ready, the name shows as a tile until it is picked up, and the board
//! clears it automatically once it has been up for two minutes.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Names stored trimmed and uppercased | `domain/board.rs` - `add()` |
//! | Blank names never posted | `domain/board.rs` - `add()` check |
//! | Ids unique and strictly increasing | `domain/board.rs` - `next_id()` |
//! | No order survives a sweep at age >= TTL | `domain/board.rs` - `sweep()` |
//! | Chime failure never fails an add | `service.rs` - `ring_chime()` |
//!
//! ## Order Lifecycle
//!
//! ```text
//! [POSTED] ──staff clears──→ [REMOVED]
//!     │
//!     └── age >= TTL (2 min) ──→ [EVICTED by sweep]
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - TerminalBell chime, public test doubles            │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - BoardApi trait                             │
//! │  ports/outbound.rs - TimeSource, Chime traits                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - Order, OrderId, BoardConfig          │
//! │  domain/board.rs         - OrderBoard with TTL eviction sweep   │
//! │  domain/value_objects.rs - BoardStatus                          │
//! │  domain/errors.rs        - BoardError enum                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `service.rs` wires the layers together: `BoardService` implements
//! `BoardApi` over a clock, a chime, and the sound gate.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::BoardService;

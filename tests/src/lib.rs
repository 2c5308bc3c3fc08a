//! # OrderUp Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Service-level scenarios
//!     ├── board_flow.rs # Order lifecycle: post, countdown, pickup, eviction
//!     └── churn.rs      # Randomized post/pickup/sweep mixes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p orderup-tests
//!
//! # By category
//! cargo test -p orderup-tests integration::board_flow::
//! cargo test -p orderup-tests integration::churn::
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

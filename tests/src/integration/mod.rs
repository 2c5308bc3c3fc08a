//! # Integration Scenarios
//!
//! Service-level tests driving `BoardService` through its inbound API
//! with a manual clock, the way the terminal frontend drives it live.

pub mod board_flow;
pub mod churn;

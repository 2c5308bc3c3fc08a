//! Error types for the pickup board.

use thiserror::Error;

/// Errors that can occur when posting an order.
///
/// Every other board operation is total: removing an absent id and
/// sweeping an empty board are no-ops, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("order name is empty")]
    EmptyName,

    #[error("order name too long: {len} > {max} characters")]
    NameTooLong { len: usize, max: usize },

    #[error("board is full: {capacity} orders")]
    BoardFull { capacity: usize },
}

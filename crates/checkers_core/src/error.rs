//! Error types for the rules engine, board diagrams and the persistence port.

use crate::types::Square;

/// A move the controller refused to apply. Always recoverable; the state the
/// move was submitted against is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("the game is already over")]
    GameOver,

    /// Origin is empty, off the board, or holds a piece of the side not to move.
    #[error("no piece of the side to move on {square}")]
    NoPieceToMove { square: Square },

    /// A capture chain is in progress and must continue from `expected`.
    #[error("capture chain must continue from {expected}, not {got}")]
    WrongChainSquare { expected: Square, got: Square },

    #[error("{from}-{to} is not a legal move")]
    NotLegal { from: Square, to: Square },
}

/// Errors produced while reading a textual board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    RowWidth { row: usize, len: usize },

    #[error("unknown glyph {glyph:?} at row {row}, col {col}")]
    Glyph { glyph: char, row: usize, col: usize },

    #[error("piece on light square at row {row}, col {col}")]
    NotPlayable { row: usize, col: usize },
}

/// Errors from a [`GameStore`](crate::store::GameStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid slot name: {0:?}")]
    InvalidSlot(String),
}

pub mod board;
pub mod error;
pub mod game;
pub mod history;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod store;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use history::GameHistory;
pub use movegen::*;
pub use notation::*;
pub use perft::{divide, perft};
pub use store::{GameStore, JsonFileStore, MemoryStore};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every computer opponent
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if the game is over)
    pub best_move: Option<Move>,
    /// Heuristic score of the chosen move from the mover's perspective
    pub score: i32,
    /// Number of candidate moves considered
    pub candidates: usize,
}

/// Trait that all checkers opponents must implement.
///
/// Selection is synchronous and returns immediately; any "thinking" delay is
/// the caller's business.
pub trait Engine: Send {
    /// Pick one move for the side to move in `state`.
    ///
    /// When `state` is mid-chain the choice is limited to the continuation
    /// square, so callers simply ask again until the turn passes.
    fn choose_move(&mut self, state: &GameState) -> SearchResult;

    /// Returns the engine's name for logs and result tables
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

//! Tiered Checkers Engine
//!
//! A one-ply greedy opponent with three difficulty tiers:
//! - Easy: uniformly random legal move (a capture whenever one is available)
//! - Medium: random among captures that do not leave material worse than -1
//! - Hard: heuristic score of the position after the move, ties broken at random
//!
//! No lookahead beyond the move itself is performed.

mod eval;

use std::fmt;
use std::str::FromStr;

use checkers_core::{Engine, GameState, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub use eval::{material_swing, score_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

/// Pick a move for the side to move using the thread RNG.
/// `None` only when the game is over.
pub fn ai_move(state: &GameState, difficulty: Difficulty) -> Option<Move> {
    ai_move_with_rng(state, difficulty, &mut rand::thread_rng())
}

pub fn ai_move_with_rng<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    select(state, difficulty, rng).map(|(mv, _)| mv)
}

/// Chosen move with its hard-tier score.
fn select<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<(Move, i32)> {
    let moves = state.all_moves();
    if moves.is_empty() {
        return None;
    }
    let side = state.turn;
    let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();

    let pick = match difficulty {
        Difficulty::Easy => {
            let pool = if captures.is_empty() { &moves } else { &captures };
            *pool.choose(rng)?
        }
        Difficulty::Medium => {
            let safe: Vec<Move> = captures
                .iter()
                .copied()
                .filter(|mv| material_swing(&state.board, mv, side) >= -1)
                .collect();
            let pool = if !safe.is_empty() {
                &safe
            } else if !captures.is_empty() {
                &captures
            } else {
                &moves
            };
            *pool.choose(rng)?
        }
        Difficulty::Hard => {
            let scored: Vec<(Move, i32)> = moves
                .iter()
                .map(|mv| (*mv, score_move(&state.board, mv, side)))
                .collect();
            let best = scored.iter().map(|(_, s)| *s).max()?;
            let top: Vec<Move> = scored
                .iter()
                .filter(|(_, s)| *s == best)
                .map(|(mv, _)| *mv)
                .collect();
            *top.choose(rng)?
        }
    };

    tracing::trace!(%difficulty, candidates = moves.len(), from = %pick.from, to = %pick.to, "ai move");
    Some((pick, score_move(&state.board, &pick, side)))
}

/// `Engine` wrapper around one difficulty tier.
#[derive(Debug, Clone)]
pub struct TieredEngine {
    difficulty: Difficulty,
    name: String,
    rng: StdRng,
}

impl TieredEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    /// Reproducible engine for tests and seeded tournaments.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            name: format!("Tiered ({difficulty})"),
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Engine for TieredEngine {
    fn choose_move(&mut self, state: &GameState) -> SearchResult {
        let candidates = state.all_moves().len();
        let chosen = select(state, self.difficulty, &mut self.rng);
        SearchResult {
            best_move: chosen.map(|(mv, _)| mv),
            score: chosen.map(|(_, s)| s).unwrap_or(0),
            candidates,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

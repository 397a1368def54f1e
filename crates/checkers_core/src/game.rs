//! Game controller: applies moves, keeps a capturing piece jumping until its
//! chain ends, passes the turn and detects the end of the game.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    board::Board,
    error::IllegalMove,
    movegen::{self, all_moves, all_turns, jump_chains, single_jumps},
    types::*,
};

/// Where the controller is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The side to move may pick any piece with a legal move.
    SelectingSource,
    /// A capture landed here and the same piece must keep jumping.
    ContinuingChain(Square),
    /// The side to move had no pieces or no legal move.
    GameOver(Side),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub phase: Phase,
    /// Number of moves applied so far; each jump of a chain counts once.
    pub ply: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Winner of the position if `side_to_move` has lost: no pieces left, or
/// pieces that cannot move.
pub fn is_terminal(board: &Board, side_to_move: Side) -> Option<Side> {
    if board.count_pieces(side_to_move) == 0 || all_moves(board, side_to_move).is_empty() {
        Some(side_to_move.other())
    } else {
        None
    }
}

impl GameState {
    /// Standard setup with Black to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Side::Black)
    }

    /// State for an arbitrary position; the terminal check runs immediately.
    pub fn from_board(board: Board, turn: Side) -> Self {
        let phase = match is_terminal(&board, turn) {
            Some(winner) => Phase::GameOver(winner),
            None => Phase::SelectingSource,
        };
        GameState {
            board,
            turn,
            phase,
            ply: 0,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The square a pending capture chain must continue from.
    pub fn chain_square(&self) -> Option<Square> {
        match self.phase {
            Phase::ContinuingChain(sq) => Some(sq),
            _ => None,
        }
    }

    /// Destinations reachable from `from` this turn. Empty when the square
    /// holds no piece of the side to move, when a chain is pending elsewhere,
    /// or when the game is over.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        match self.phase {
            Phase::GameOver(_) => Vec::new(),
            Phase::ContinuingChain(sq) if sq != from => Vec::new(),
            Phase::ContinuingChain(_) => continuation_moves(&self.board, from),
            Phase::SelectingSource => movegen::legal_moves(&self.board, from, self.turn),
        }
    }

    /// Every move the side to move may submit right now.
    pub fn all_moves(&self) -> Vec<Move> {
        match self.phase {
            Phase::GameOver(_) => Vec::new(),
            Phase::ContinuingChain(sq) => continuation_moves(&self.board, sq),
            Phase::SelectingSource => all_moves(&self.board, self.turn),
        }
    }

    /// Complete turns open to the side to move: whole chains when capturing,
    /// otherwise one single-link chain per simple move.
    pub fn turns(&self) -> Vec<JumpChain> {
        match self.phase {
            Phase::GameOver(_) => Vec::new(),
            Phase::ContinuingChain(sq) => jump_chains(&self.board, sq),
            Phase::SelectingSource => all_turns(&self.board, self.turn),
        }
    }

    /// Apply one step. The move is matched against the legal set by origin and
    /// destination, so callers may omit the capture and promotion fields.
    /// On rejection `self` is unchanged and the reason is returned.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, IllegalMove> {
        let legal = self.validate(mv).inspect_err(|err| {
            debug!(%err, turn = %self.turn, "rejected move");
        })?;

        let board = self.board.with_piece_moved(&legal);
        let continues = legal.is_capture()
            && !legal.promotes
            && !single_jumps(&board, legal.to).is_empty();

        let next = if continues {
            debug!(square = %legal.to, "capture chain continues");
            GameState {
                board,
                turn: self.turn,
                phase: Phase::ContinuingChain(legal.to),
                ply: self.ply.saturating_add(1),
            }
        } else {
            let turn = self.turn.other();
            let phase = match is_terminal(&board, turn) {
                Some(winner) => Phase::GameOver(winner),
                None => Phase::SelectingSource,
            };
            GameState {
                board,
                turn,
                phase,
                ply: self.ply.saturating_add(1),
            }
        };
        trace!(from = %legal.from, to = %legal.to, turn = %self.turn, "applied move");
        Ok(next)
    }

    /// Commit every link of a chain, or none of them.
    pub fn apply_chain(&self, chain: &JumpChain) -> Result<GameState, IllegalMove> {
        let mut state = self.clone();
        for link in &chain.links {
            if state.turn != self.turn {
                // Turn passed before the chain was exhausted.
                return Err(IllegalMove::NotLegal {
                    from: link.from,
                    to: link.to,
                });
            }
            state = state.apply_move(*link)?;
        }
        Ok(state)
    }

    fn validate(&self, mv: Move) -> Result<Move, IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if let Some(expected) = self.chain_square() {
            if mv.from != expected {
                return Err(IllegalMove::WrongChainSquare {
                    expected,
                    got: mv.from,
                });
            }
        }
        match self.board.piece_at(mv.from) {
            Some(pc) if pc.owner == self.turn => {}
            _ => return Err(IllegalMove::NoPieceToMove { square: mv.from }),
        }
        self.legal_moves(mv.from)
            .into_iter()
            .find(|m| m.to == mv.to)
            .ok_or(IllegalMove::NotLegal {
                from: mv.from,
                to: mv.to,
            })
    }
}

/// Next links available to a piece part way through a chain: only captures.
fn continuation_moves(board: &Board, from: Square) -> Vec<Move> {
    jump_chains(board, from)
        .into_iter()
        .filter_map(|c| c.first())
        .fold(Vec::new(), |mut out, m| {
            if !out.contains(&m) {
                out.push(m);
            }
            out
        })
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

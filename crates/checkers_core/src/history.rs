//! Undo/redo over immutable game snapshots.

use crate::{error::IllegalMove, game::GameState, types::Move};

#[derive(Clone, Debug, Default)]
pub struct GameHistory {
    current: GameState,
    past: Vec<(GameState, Move)>,
    future: Vec<(GameState, Move)>,
}

impl GameHistory {
    pub fn new(start: GameState) -> Self {
        Self {
            current: start,
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Apply `mv` to the current state. A rejected move leaves the history
    /// untouched; an accepted one clears the redo stack.
    pub fn play(&mut self, mv: Move) -> Result<&GameState, IllegalMove> {
        let next = self.current.apply_move(mv)?;
        let applied = self
            .current
            .legal_moves(mv.from)
            .into_iter()
            .find(|m| m.to == mv.to)
            .unwrap_or(mv);
        let prev = std::mem::replace(&mut self.current, next);
        self.past.push((prev, applied));
        self.future.clear();
        Ok(&self.current)
    }

    /// Step back one applied move. Returns false at the start of the game.
    pub fn undo(&mut self) -> bool {
        let Some((prev, mv)) = self.past.pop() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, prev);
        self.future.push((undone, mv));
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some((next, mv)) = self.future.pop() else {
            return false;
        };
        let prev = std::mem::replace(&mut self.current, next);
        self.past.push((prev, mv));
        true
    }

    /// Undo every step of the most recent turn, so a capture chain is taken
    /// back as a whole. Returns the number of steps undone.
    pub fn undo_turn(&mut self) -> usize {
        let Some((_, last)) = self.past.last() else {
            return 0;
        };
        let mover = self
            .current
            .board
            .piece_at(last.to)
            .map(|pc| pc.owner)
            .unwrap_or(self.current.turn);

        let mut steps = 0;
        while let Some((prev, _)) = self.past.last() {
            if prev.turn != mover {
                break;
            }
            let chain_continues = prev.chain_square().is_some();
            self.undo();
            steps += 1;
            if !chain_continues {
                break;
            }
        }
        steps
    }

    /// Moves applied from the start to the current state.
    pub fn moves(&self) -> Vec<Move> {
        self.past.iter().map(|(_, mv)| *mv).collect()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

//! Match runner for playing games between engines

use checkers_core::{Engine, GameState, Side};
use tracing::{info, warn};

use crate::scoreboard::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Moves (single jumps included) before the game is called a draw
    pub max_plies: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 300,
            alternate_sides: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Black moves first; engine1 takes Black on even games when alternating
            let engine1_black = !self.config.alternate_sides || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = engine1.name(),
                engine2 = engine2.name(),
                side = if engine1_black { "black" } else { "red" },
                outcome = ?game_result,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns result from Black's perspective
    pub fn play_game(&self, black: &mut dyn Engine, red: &mut dyn Engine) -> GameResult {
        let mut state = GameState::new_game();
        black.new_game();
        red.new_game();

        for _ in 0..self.config.max_plies {
            if let Some(winner) = state.winner() {
                return result_for_black(winner);
            }

            // A side keeps being asked while its capture chain continues
            let engine: &mut dyn Engine = match state.turn {
                Side::Black => &mut *black,
                Side::Red => &mut *red,
            };
            let Some(mv) = engine.choose_move(&state).best_move else {
                warn!(engine = engine.name(), "engine returned no move in a live position");
                return result_for_black(state.turn.other());
            };

            state = match state.apply_move(mv) {
                Ok(next) => next,
                Err(err) => {
                    // An illegal move forfeits the game
                    warn!(engine = engine.name(), %err, "engine played an illegal move");
                    return result_for_black(state.turn.other());
                }
            };
        }

        match state.winner() {
            Some(winner) => result_for_black(winner),
            // Move cap reached
            None => GameResult::Draw,
        }
    }
}

fn result_for_black(winner: Side) -> GameResult {
    match winner {
        Side::Black => GameResult::Win,
        Side::Red => GameResult::Loss,
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

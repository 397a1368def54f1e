use super::*;
use checkers_core::{Move, SearchResult};
use tiered_engine::{Difficulty, TieredEngine};

#[test]
fn test_self_play() {
    let mut engine1 = TieredEngine::seeded(Difficulty::Medium, 1);
    let mut engine2 = TieredEngine::seeded(Difficulty::Medium, 2);

    let config = MatchConfig {
        num_games: 4,
        max_plies: 200,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 4);
}

#[test]
fn test_move_cap_is_a_draw() {
    let mut black = TieredEngine::seeded(Difficulty::Easy, 3);
    let mut red = TieredEngine::seeded(Difficulty::Easy, 4);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        max_plies: 2,
        alternate_sides: false,
    });
    assert_eq!(runner.play_game(&mut black, &mut red), GameResult::Draw);
}

/// Always submits the same off-board move.
struct Cheater;

impl Engine for Cheater {
    fn choose_move(&mut self, _state: &GameState) -> SearchResult {
        let off = checkers_core::Square::new(9, 9);
        SearchResult {
            best_move: Some(Move::new(off, off)),
            score: 0,
            candidates: 0,
        }
    }

    fn name(&self) -> &str {
        "Cheater"
    }
}

#[test]
fn test_illegal_move_forfeits() {
    let mut honest = TieredEngine::seeded(Difficulty::Hard, 5);
    let mut cheater = Cheater;
    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        ..Default::default()
    });

    // Cheater plays Black first, so Black loses
    assert_eq!(runner.play_game(&mut cheater, &mut honest), GameResult::Loss);

    let result = runner.run_match(&mut honest, &mut cheater);
    assert_eq!(result.wins, 2);
}

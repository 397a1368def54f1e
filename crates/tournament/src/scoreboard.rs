//! Win/loss/draw bookkeeping, per match and across sessions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::TournamentError;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    pub fn flipped(&self) -> MatchResult {
        MatchResult {
            wins: self.losses,
            losses: self.wins,
            draws: self.draws,
        }
    }
}

/// Running totals for every participant, saved between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub totals: BTreeMap<String, MatchResult>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; a missing file is an empty scoreboard.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(TournamentError::io(path, e)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Credit a match to both sides; `result` is from `engine1`'s perspective.
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: &MatchResult) {
        let e1 = self.totals.entry(engine1.to_string()).or_default();
        e1.wins += result.wins;
        e1.losses += result.losses;
        e1.draws += result.draws;

        let flipped = result.flipped();
        let e2 = self.totals.entry(engine2.to_string()).or_default();
        e2.wins += flipped.wins;
        e2.losses += flipped.losses;
        e2.draws += flipped.draws;
    }

    /// Participants sorted by score, best first
    pub fn standings(&self) -> Vec<(&str, &MatchResult)> {
        let mut entries: Vec<_> = self
            .totals
            .iter()
            .map(|(name, r)| (name.as_str(), r))
            .collect();
        entries.sort_by(|a, b| {
            b.1.score()
                .partial_cmp(&a.1.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Scoreboard ===\n");
        out.push_str(&format!(
            "{:<20} {:>6} {:>6} {:>6} {:>7}\n",
            "Player", "W", "L", "D", "Score"
        ));
        out.push_str(&"-".repeat(49));
        out.push('\n');
        for (name, r) in self.standings() {
            out.push_str(&format!(
                "{:<20} {:>6} {:>6} {:>6} {:>6.1}%\n",
                name,
                r.wins,
                r.losses,
                r.draws,
                r.score() * 100.0
            ));
        }
        out
    }
}

#[cfg(test)]
#[path = "scoreboard_tests.rs"]
mod scoreboard_tests;

//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::TournamentError;
use crate::scoreboard::MatchResult;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results in play order
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Tournament configuration, usually read from a TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TournamentConfig {
    /// Difficulty names of the participants
    pub participants: Vec<String>,
    pub games_per_match: u32,
    pub max_plies_per_game: u32,
    /// Seed for reproducible engines; entropy when absent
    pub seed: Option<u64>,
    /// Where the JSON results are written
    pub results_path: PathBuf,
    /// Where the running win/loss totals are kept
    pub scoreboard_path: PathBuf,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            participants: vec!["easy".into(), "medium".into(), "hard".into()],
            games_per_match: 10,
            max_plies_per_game: 300,
            seed: None,
            results_path: PathBuf::from("tournament_results.json"),
            scoreboard_path: PathBuf::from("tournament_scoreboard.json"),
        }
    }
}

impl TournamentConfig {
    /// Read a TOML config; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TournamentError::io(path, e)),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} plies max\n\n",
            self.config.games_per_match, self.config.max_plies_per_game
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_toml_with_defaults() {
        let cfg = TournamentConfig::from_toml(
            r#"
            participants = ["easy", "hard"]
            games_per_match = 4
            seed = 99
            "#,
        )
        .unwrap();
        assert_eq!(cfg.participants, vec!["easy", "hard"]);
        assert_eq!(cfg.games_per_match, 4);
        assert_eq!(cfg.seed, Some(99));
        // Unset keys fall back to defaults
        assert_eq!(cfg.max_plies_per_game, 300);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(matches!(
            TournamentConfig::from_toml("games_per_match = \"many\""),
            Err(TournamentError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let path = std::env::temp_dir().join("definitely_missing_tournament.toml");
        assert_eq!(TournamentConfig::load(&path).unwrap(), TournamentConfig::default());
    }

    #[test]
    fn test_results_roundtrip_and_report() {
        let mut results = TournamentResults::new(
            "Round robin",
            vec!["easy".into(), "hard".into()],
            TournamentConfig::default(),
        );
        results.add_match(
            "hard",
            "easy",
            MatchResult {
                wins: 9,
                losses: 0,
                draws: 1,
            },
        );

        let path = std::env::temp_dir().join(format!("results_{}.json", std::process::id()));
        results.save(&path).unwrap();
        let loaded = TournamentResults::load(&path).unwrap();
        assert_eq!(loaded.matches.len(), 1);
        assert_eq!(loaded.matches[0].result.wins, 9);

        let report = loaded.generate_report();
        assert!(report.contains("Round robin"));
        assert!(report.contains("hard"));

        let _ = std::fs::remove_file(&path);
    }
}

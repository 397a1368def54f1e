//! Tournament CLI
//!
//! Pit the checkers AI tiers against each other and keep a scoreboard.

use checkers_core::{divide, GameState};
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tiered_engine::{Difficulty, TieredEngine};
use tournament::{
    MatchConfig, MatchRunner, Scoreboard, TournamentConfig, TournamentError, TournamentResults,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "tournament.toml";

fn print_usage() {
    println!("Checkers Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <tier1> <tier2> [--games N] [--max-plies N] [--seed S]");
    println!("  tournament round-robin [--config PATH] [--games N] [--max-plies N] [--seed S]");
    println!("  tournament perft <depth>");
    println!("  tournament scoreboard [--config PATH]");
    println!();
    println!("Tiers:");
    println!("  easy     - Random legal move");
    println!("  medium   - Random capture that keeps material close");
    println!("  hard     - Greedy one-ply heuristic");
    println!();
    println!("Set RUST_LOG=debug for per-move logging.");
}

/// Flags shared by every command; unset ones leave the config untouched.
#[derive(Debug, Default)]
struct Overrides {
    config: Option<PathBuf>,
    games: Option<u32>,
    max_plies: Option<u32>,
    seed: Option<u64>,
}

impl Overrides {
    fn parse(args: &[String]) -> (Vec<String>, Overrides) {
        let mut positional = Vec::new();
        let mut overrides = Overrides::default();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match (args[i].as_str(), value) {
                ("--config" | "-c", Some(v)) => {
                    overrides.config = Some(PathBuf::from(v));
                    i += 1;
                }
                ("--games" | "-g", Some(v)) => {
                    overrides.games = v.parse().ok();
                    i += 1;
                }
                ("--max-plies" | "-m", Some(v)) => {
                    overrides.max_plies = v.parse().ok();
                    i += 1;
                }
                ("--seed" | "-s", Some(v)) => {
                    overrides.seed = v.parse().ok();
                    i += 1;
                }
                (arg, _) => positional.push(arg.to_string()),
            }
            i += 1;
        }

        (positional, overrides)
    }

    fn apply(&self) -> Result<TournamentConfig, TournamentError> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
        let mut config = TournamentConfig::load(&path)?;
        if let Some(games) = self.games {
            config.games_per_match = games;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies_per_game = max_plies;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn create_engine(difficulty: Difficulty, seed: Option<u64>) -> TieredEngine {
    match seed {
        Some(seed) => TieredEngine::seeded(difficulty, seed),
        None => TieredEngine::new(difficulty),
    }
}

fn match_config(config: &TournamentConfig) -> MatchConfig {
    MatchConfig {
        num_games: config.games_per_match,
        max_plies: config.max_plies_per_game,
        ..Default::default()
    }
}

fn run_match(args: &[String]) -> Result<(), TournamentError> {
    let (positional, overrides) = Overrides::parse(args);
    let [tier1, tier2] = positional.as_slice() else {
        eprintln!("Error: match requires two tiers");
        print_usage();
        return Ok(());
    };
    let d1: Difficulty = tier1.parse()?;
    let d2: Difficulty = tier2.parse()?;
    let config = overrides.apply()?;

    println!("=== Match: {d1} vs {d2} ===");
    println!(
        "Games: {}, Max plies: {}",
        config.games_per_match, config.max_plies_per_game
    );
    println!();

    // Distinct streams so a mirror match is not two identical players
    let mut engine1 = create_engine(d1, config.seed);
    let mut engine2 = create_engine(d2, config.seed.map(|s| s.wrapping_add(1)));

    let runner = MatchRunner::new(match_config(&config));
    let result = runner.run_match(&mut engine1, &mut engine2);

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        d1, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut scoreboard = Scoreboard::load(&config.scoreboard_path)?;
    scoreboard.add_match(&d1.to_string(), &d2.to_string(), &result);
    scoreboard.save(&config.scoreboard_path)?;
    print!("\n{}", scoreboard.render());
    Ok(())
}

fn run_round_robin(args: &[String]) -> Result<(), TournamentError> {
    let (_, overrides) = Overrides::parse(args);
    let config = overrides.apply()?;
    let tiers = config
        .participants
        .iter()
        .map(|p| p.parse::<Difficulty>())
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        participants = ?config.participants,
        games_per_match = config.games_per_match,
        "starting round robin"
    );

    let mut scoreboard = Scoreboard::load(&config.scoreboard_path)?;
    let mut results = TournamentResults::new(
        "Round robin",
        config.participants.clone(),
        config.clone(),
    );
    let runner = MatchRunner::new(match_config(&config));

    let mut pairing = 0u64;
    for (i, &d1) in tiers.iter().enumerate() {
        for &d2 in &tiers[i + 1..] {
            println!("\n--- {d1} vs {d2} ---");
            let seed = config.seed.map(|s| s.wrapping_add(2 * pairing));
            let mut engine1 = create_engine(d1, seed);
            let mut engine2 = create_engine(d2, seed.map(|s| s.wrapping_add(1)));
            pairing += 1;

            let result = runner.run_match(&mut engine1, &mut engine2);
            println!(
                "Result: {}-{}-{} (Score: {:.1}%)",
                result.wins,
                result.losses,
                result.draws,
                result.score() * 100.0
            );

            scoreboard.add_match(&d1.to_string(), &d2.to_string(), &result);
            results.add_match(&d1.to_string(), &d2.to_string(), result);
        }
    }

    println!();
    print!("{}", results.generate_report());
    print!("\n{}", scoreboard.render());

    results.save(&config.results_path)?;
    scoreboard.save(&config.scoreboard_path)?;
    info!(path = %config.results_path.display(), "results saved");
    Ok(())
}

fn run_perft(args: &[String]) {
    let depth: u8 = args.first().and_then(|d| d.parse().ok()).unwrap_or(5);
    let state = GameState::new_game();

    let start = Instant::now();
    let breakdown = divide(&state, depth);
    let total: u64 = breakdown.iter().map(|(_, n)| n).sum();
    let elapsed = start.elapsed();

    for (mv, nodes) in &breakdown {
        println!("{mv}: {nodes}");
    }
    println!();
    println!("Depth {depth}: {total} nodes in {:.3}s", elapsed.as_secs_f64());
}

fn show_scoreboard(args: &[String]) -> Result<(), TournamentError> {
    let (_, overrides) = Overrides::parse(args);
    let config = overrides.apply()?;
    let scoreboard = Scoreboard::load(&config.scoreboard_path)?;
    if scoreboard.totals.is_empty() {
        println!("No tournament data found. Run some matches first!");
    } else {
        print!("{}", scoreboard.render());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "round-robin" | "rr" => run_round_robin(&args[2..]),
        "perft" => {
            run_perft(&args[2..]);
            Ok(())
        }
        "scoreboard" | "leaderboard" => show_scoreboard(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        error!("{e}");
        std::process::exit(1);
    }
}

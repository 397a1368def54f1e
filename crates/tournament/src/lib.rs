//! Tournament runner for the checkers AI tiers
//!
//! This crate provides infrastructure for:
//! - Playing matches between engines with a ply cap
//! - Keeping a persistent win/loss/draw scoreboard
//! - Round robins configured from a TOML file
//!
//! # Usage
//!
//! ```bash
//! # Hard against Easy, 20 games
//! cargo run -p tournament -- match hard easy --games 20
//!
//! # Every tier against every other, settings from a TOML file
//! cargo run -p tournament -- round-robin --config tournament.toml
//! ```

mod error;
mod match_runner;
mod results;
mod scoreboard;

pub use error::*;
pub use match_runner::*;
pub use results::*;
pub use scoreboard::*;

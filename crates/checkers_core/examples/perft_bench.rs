//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth]
//!
//! Examples:
//!   # Default: depth 8 over every test position
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p checkers_core -- 9

use checkers_core::{perft, Board, GameState, Side};
use std::env;
use std::time::Instant;

/// Test positions as board diagrams, row 0 first.
const TEST_POSITIONS: &[(&str, Side, &str)] = &[
    (
        "Starting position",
        Side::Black,
        "
        .b.b.b.b
        b.b.b.b.
        .b.b.b.b
        ........
        ........
        r.r.r.r.
        .r.r.r.r
        r.r.r.r.",
    ),
    (
        "Kings endgame",
        Side::Red,
        "
        ...B....
        ........
        .....b..
        ..r.....
        ........
        ..R...r.
        ........
        ..r.....",
    ),
    (
        "Double-jump middlegame",
        Side::Black,
        "
        .b.b...b
        b...b.b.
        .b.....b
        ..r.b...
        ...r....
        r...r.r.
        .r...r.r
        r.r.r...",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, turn, diagram) in TEST_POSITIONS {
        let board = match Board::from_diagram(diagram) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let state = GameState::from_board(board, *turn);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}

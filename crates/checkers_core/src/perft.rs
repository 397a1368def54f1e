use crate::{game::GameState, notation::chain_to_text};

/// Pure perft node count.
/// One ply is a whole turn: a capture chain counts once, however many jumps
/// it takes.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if state.is_over() {
        return 0;
    }

    let mut nodes = 0u64;
    for turn in state.turns() {
        // Generated chains are legal by construction
        if let Ok(next) = state.apply_chain(&turn) {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Per-root-turn breakdown of `perft`, sorted by move text.
pub fn divide(state: &GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 || state.is_over() {
        return Vec::new();
    }
    let mut out: Vec<(String, u64)> = state
        .turns()
        .into_iter()
        .filter_map(|turn| {
            let next = state.apply_chain(&turn).ok()?;
            Some((chain_to_text(&turn), perft(&next, depth - 1)))
        })
        .collect();
    out.sort();
    out
}

use crate::{board::Board, types::*};

/// Empty diagonal neighbours the piece on `from` may step to.
pub fn simple_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    pc.directions()
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.piece_at(to).is_none())
        .collect()
}

/// Single captures from `from`: an adjacent opposing piece with an empty
/// on-board square directly beyond it.
pub fn single_jumps(board: &Board, from: Square) -> Vec<Jump> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for &(dr, dc) in pc.directions() {
        let Some(over) = from.offset(dr, dc) else {
            continue;
        };
        let Some(landing) = over.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(over) {
            Some(victim) if victim.owner != pc.owner => {
                if board.piece_at(landing).is_none() {
                    out.push(Jump {
                        landing,
                        captured: over,
                    });
                }
            }
            _ => {}
        }
    }
    out
}

/// Every maximal capture chain starting at `from`. Each link is applied to a
/// scratch board before the next is searched, so captured pieces are gone and
/// the mover stands on its landing square. A man that reaches the back rank
/// ends its chain there; crowning happens once the chain is over.
pub fn jump_chains(board: &Board, from: Square) -> Vec<JumpChain> {
    let mut out = Vec::new();
    let mut links = Vec::new();
    extend_chain(board, from, &mut links, &mut out);
    out
}

fn extend_chain(board: &Board, from: Square, links: &mut Vec<Move>, out: &mut Vec<JumpChain>) {
    let jumps = single_jumps(board, from);
    if jumps.is_empty() {
        if !links.is_empty() {
            out.push(JumpChain {
                links: links.clone(),
            });
        }
        return;
    }
    for jump in jumps {
        let mv = step(board, from, jump.landing, Some(jump.captured));
        let next = board.with_piece_moved(&mv);
        links.push(mv);
        if mv.promotes {
            out.push(JumpChain {
                links: links.clone(),
            });
        } else {
            extend_chain(&next, jump.landing, links, out);
        }
        links.pop();
    }
}

/// Builds the `Move` for one step, flagging promotion for a man landing on
/// the opponent's back rank.
fn step(board: &Board, from: Square, to: Square, captured: Option<Square>) -> Move {
    let promotes = match board.piece_at(from) {
        Some(pc) => pc.rank == Rank::Man && to.row == pc.owner.promotion_row(),
        None => false,
    };
    Move {
        from,
        to,
        captured,
        promotes,
    }
}

/// True iff some piece of `owner` has at least one single jump.
pub fn any_jump_exists(board: &Board, owner: Side) -> bool {
    board
        .pieces(owner)
        .any(|(sq, _)| !single_jumps(board, sq).is_empty())
}

/// Legal moves for the piece on `from`, honouring forced capture across the
/// whole board. Captures are returned as the first link of each distinct
/// chain; the controller keeps the same piece jumping until its chain ends.
pub fn legal_moves(board: &Board, from: Square, owner: Side) -> Vec<Move> {
    let must_capture = any_jump_exists(board, owner);
    legal_moves_with(board, from, owner, must_capture)
}

fn legal_moves_with(board: &Board, from: Square, owner: Side, must_capture: bool) -> Vec<Move> {
    match board.piece_at(from) {
        Some(pc) if pc.owner == owner => {}
        _ => return Vec::new(),
    }
    if must_capture {
        let mut out: Vec<Move> = Vec::new();
        for chain in jump_chains(board, from) {
            if let Some(first) = chain.first() {
                if !out.contains(&first) {
                    out.push(first);
                }
            }
        }
        out
    } else {
        simple_moves(board, from)
            .into_iter()
            .map(|to| step(board, from, to, None))
            .collect()
    }
}

/// Union of `legal_moves` over every square holding an `owner` piece.
pub fn all_moves(board: &Board, owner: Side) -> Vec<Move> {
    let must_capture = any_jump_exists(board, owner);
    board
        .pieces(owner)
        .flat_map(|(sq, _)| legal_moves_with(board, sq, owner, must_capture))
        .collect()
}

/// Every complete turn available to `owner`: full chains when capture is
/// forced, otherwise one single-step chain per simple move.
pub fn all_turns(board: &Board, owner: Side) -> Vec<JumpChain> {
    if any_jump_exists(board, owner) {
        board
            .pieces(owner)
            .flat_map(|(sq, _)| jump_chains(board, sq))
            .collect()
    } else {
        all_moves(board, owner)
            .into_iter()
            .map(|mv| JumpChain { links: vec![mv] })
            .collect()
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

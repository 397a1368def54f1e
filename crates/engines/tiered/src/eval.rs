//! Material-based move scoring

use checkers_core::{Board, Move, Side};

/// Material difference after `mv`: own pieces minus opposing pieces.
pub fn material_swing(board: &Board, mv: &Move, side: Side) -> i32 {
    let after = board.with_piece_moved(mv);
    after.count_pieces(side) as i32 - after.count_pieces(side.other()) as i32
}

/// Hard-tier score of playing `mv` for `side`:
/// 10 per own piece, -10 per opposing piece, +15 for a capture,
/// +2 when the mover is already a king, +5 for landing on the far back rank.
pub fn score_move(board: &Board, mv: &Move, side: Side) -> i32 {
    let mut score = 10 * material_swing(board, mv, side);
    if mv.is_capture() {
        score += 15;
    }
    if board.piece_at(mv.from).is_some_and(|pc| pc.is_king()) {
        score += 2;
    }
    if mv.to.row == side.promotion_row() {
        score += 5;
    }
    score
}

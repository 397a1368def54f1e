use super::*;

fn board(text: &str) -> Board {
    Board::from_diagram(text).unwrap()
}

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_new_game() {
    let g = GameState::new_game();
    assert_eq!(g.turn, Side::Black);
    assert_eq!(g.phase, Phase::SelectingSource);
    assert_eq!(g.board.count_pieces(Side::Black), 12);
    assert_eq!(g.board.count_pieces(Side::Red), 12);
    assert_eq!(g.winner(), None);
    assert_eq!(g.all_moves().len(), 7);
}

#[test]
fn test_simple_move_switches_turn() {
    let g = GameState::new_game();
    let next = g.apply_move(Move::new(s(2, 1), s(3, 2))).unwrap();
    assert_eq!(next.turn, Side::Red);
    assert_eq!(next.phase, Phase::SelectingSource);
    assert_eq!(next.ply, 1);
    assert!(next.board.piece_at(s(2, 1)).is_none());
    assert_eq!(next.board.piece_at(s(3, 2)), Some(Piece::man(Side::Black)));
}

#[test]
fn test_single_capture_removes_piece() {
    // Move a red man from (5,0) up to (3,2) so Black can take it
    let b = Board::standard()
        .with_piece(s(5, 0), None)
        .with_piece(s(3, 2), Some(Piece::man(Side::Red)));
    let g = GameState::from_board(b, Side::Black);

    let next = g.apply_move(Move::new(s(2, 1), s(4, 3))).unwrap();
    assert!(next.board.piece_at(s(3, 2)).is_none());
    assert_eq!(next.board.piece_at(s(4, 3)), Some(Piece::man(Side::Black)));
    assert_eq!(next.board.count_pieces(Side::Red), 11);
    assert_eq!(next.turn, Side::Red);
}

#[test]
fn test_man_reaching_back_rank_is_crowned() {
    let b = board(
        "........
         ........
         ........
         ....r...
         ........
         ........
         .b......
         ........",
    );
    let g = GameState::from_board(b, Side::Black);
    for col in [0, 2] {
        let next = g.apply_move(Move::new(s(6, 1), s(7, col))).unwrap();
        assert_eq!(next.board.piece_at(s(7, col)), Some(Piece::king(Side::Black)));
    }
}

const PENDING_DOUBLE: &str = "
    .b......
    ........
    .....b..
    ........
    ...b....
    ..r.....
    .r......
    ........";

#[test]
fn test_chain_keeps_turn_and_restricts_origin() {
    let g = GameState::from_board(board(PENDING_DOUBLE), Side::Red);
    assert_eq!(g.all_moves().len(), 1);

    let mid = g.apply_move(Move::new(s(5, 2), s(3, 4))).unwrap();
    assert_eq!(mid.turn, Side::Red);
    assert_eq!(mid.phase, Phase::ContinuingChain(s(3, 4)));
    assert_eq!(mid.chain_square(), Some(s(3, 4)));

    let next = mid.all_moves();
    assert!(!next.is_empty());
    assert!(next.iter().all(|m| m.from == s(3, 4) && m.is_capture()));
    assert!(mid.legal_moves(s(6, 1)).is_empty());

    // Another piece may not move mid-chain
    assert_eq!(
        mid.apply_move(Move::new(s(6, 1), s(5, 0))),
        Err(IllegalMove::WrongChainSquare {
            expected: s(3, 4),
            got: s(6, 1)
        })
    );

    let done = mid.apply_move(Move::new(s(3, 4), s(1, 6))).unwrap();
    assert_eq!(done.turn, Side::Black);
    assert_eq!(done.phase, Phase::SelectingSource);
    assert_eq!(done.board.count_pieces(Side::Black), 1);
    assert_eq!(done.board.piece_at(s(1, 6)), Some(Piece::man(Side::Red)));
}

#[test]
fn test_apply_chain_commits_all_links() {
    let g = GameState::from_board(board(PENDING_DOUBLE), Side::Red);
    let chains = movegen::jump_chains(&g.board, s(5, 2));
    assert_eq!(chains.len(), 1);

    let done = g.apply_chain(&chains[0]).unwrap();
    assert_eq!(done.turn, Side::Black);
    assert_eq!(done.board.count_pieces(Side::Black), 1);
    assert_eq!(done.ply, 2);
}

#[test]
fn test_apply_chain_is_all_or_nothing() {
    let g = GameState::from_board(board(PENDING_DOUBLE), Side::Red);
    let bad = JumpChain {
        links: vec![
            Move::new(s(5, 2), s(3, 4)),
            // Wrong direction for the second link
            Move::new(s(3, 4), s(1, 2)),
        ],
    };
    let before = g.clone();
    assert!(g.apply_chain(&bad).is_err());
    assert_eq!(g, before);
}

#[test]
fn test_illegal_moves_are_rejected_without_change() {
    let b = board(
        "........
         ........
         .b...b..
         ..r.....
         ........
         ........
         ........
         ........",
    );
    let g = GameState::from_board(b, Side::Black);
    let before = g.clone();

    // Empty origin
    assert_eq!(
        g.apply_move(Move::new(s(4, 4), s(5, 5))),
        Err(IllegalMove::NoPieceToMove { square: s(4, 4) })
    );
    // Opponent's piece
    assert_eq!(
        g.apply_move(Move::new(s(3, 2), s(2, 3))),
        Err(IllegalMove::NoPieceToMove { square: s(3, 2) })
    );
    // Off the board
    assert!(matches!(
        g.apply_move(Move::new(s(-1, 9), s(0, 0))),
        Err(IllegalMove::NoPieceToMove { .. })
    ));
    // Simple move while a capture is available
    assert_eq!(
        g.apply_move(Move::new(s(2, 5), s(3, 6))),
        Err(IllegalMove::NotLegal {
            from: s(2, 5),
            to: s(3, 6)
        })
    );
    assert_eq!(g, before);
}

#[test]
fn test_submitted_flags_are_taken_from_legal_move() {
    let b = board(
        "........
         ........
         .b......
         ..r.....
         ........
         ........
         .....r..
         ........",
    );
    let g = GameState::from_board(b, Side::Black);
    // Caller claims no capture; the controller still removes the jumped man
    let next = g.apply_move(Move::new(s(2, 1), s(4, 3))).unwrap();
    assert!(next.board.piece_at(s(3, 2)).is_none());
}

#[test]
fn test_crowning_ends_chain() {
    // A freshly crowned king could jump (6,5) backwards, but crowning only
    // happens when the chain is over, so the turn passes.
    let b = board(
        "........
         ........
         ........
         ........
         ........
         ..b.....
         ...r.r..
         ........",
    );
    let g = GameState::from_board(b, Side::Black);
    let next = g.apply_move(Move::new(s(5, 2), s(7, 4))).unwrap();
    assert_eq!(next.turn, Side::Red);
    assert_eq!(next.phase, Phase::SelectingSource);
    assert_eq!(next.board.piece_at(s(7, 4)), Some(Piece::king(Side::Black)));
}

#[test]
fn test_capturing_last_piece_wins() {
    let b = board(
        "........
         ........
         .b......
         ..r.....
         ........
         ........
         ........
         ........",
    );
    let g = GameState::from_board(b, Side::Black);
    let next = g.apply_move(Move::new(s(2, 1), s(4, 3))).unwrap();
    assert_eq!(next.board.count_pieces(Side::Red), 0);
    assert_eq!(next.winner(), Some(Side::Black));
    assert!(next.all_moves().is_empty());
    assert_eq!(
        next.apply_move(Move::new(s(4, 3), s(5, 4))),
        Err(IllegalMove::GameOver)
    );
}

#[test]
fn test_blocked_side_loses() {
    let b = board(
        "........
         ........
         ........
         ........
         ........
         ........
         .......b
         ......r.",
    );
    assert_eq!(is_terminal(&b, Side::Black), Some(Side::Red));
    let g = GameState::from_board(b, Side::Black);
    assert_eq!(g.winner(), Some(Side::Red));
    assert!(g.legal_moves(s(6, 7)).is_empty());
}

#[test]
fn test_state_serializes() {
    let g = GameState::new_game();
    let json = serde_json::to_string(&g).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
}

#[test]
fn test_ply_counter_saturates() {
    let mut g = GameState::new_game();
    g.ply = u32::MAX;
    let next = g.apply_move(Move::new(s(2, 1), s(3, 2))).unwrap();
    assert_eq!(next.ply, u32::MAX);
    assert_eq!(next.turn, Side::Red);
}

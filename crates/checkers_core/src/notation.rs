use crate::{game::GameState, types::*};

pub fn square_to_text(sq: Square) -> String {
    sq.to_string()
}

pub fn parse_square(txt: &str) -> Option<Square> {
    let b = txt.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some(Square::new((r - b'1') as i8, (f - b'a') as i8))
}

/// `b3-c4` for a step, `b3xd5` for a capture.
pub fn move_to_text(mv: Move) -> String {
    let sep = if mv.is_capture() { 'x' } else { '-' };
    format!("{}{sep}{}", mv.from, mv.to)
}

/// Captures joined through every landing square: `b3xd5xf7`.
pub fn chain_to_text(chain: &JumpChain) -> String {
    let Some(first) = chain.first() else {
        return String::new();
    };
    if chain.len() == 1 {
        return move_to_text(first);
    }
    let mut s = first.from.to_string();
    for link in &chain.links {
        s.push('x');
        s.push_str(&link.to.to_string());
    }
    s
}

/// Parse `b3-c4` or `b3xd5` and match it against the legal moves of `state`,
/// so the returned move carries the engine's capture and promotion flags.
pub fn parse_move(state: &GameState, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    let (from, to) = txt.split_once(['-', 'x', 'X'])?;
    let from = parse_square(from)?;
    let to = parse_square(to)?;
    let capture = txt.contains(['x', 'X']);

    state
        .legal_moves(from)
        .into_iter()
        .find(|m| m.to == to && m.is_capture() == capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_square_text() {
        assert_eq!(square_to_text(Square::new(2, 1)), "b3");
        assert_eq!(square_to_text(Square::new(7, 6)), "g8");
        assert_eq!(parse_square("b3"), Some(Square::new(2, 1)));
        assert_eq!(parse_square("H8"), Some(Square::new(7, 7)));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("a10"), None);
    }

    #[test]
    fn test_parse_move_matches_legal_set() {
        let g = GameState::new_game();
        let mv = parse_move(&g, "b3-c4").unwrap();
        assert_eq!(mv, Move::new(Square::new(2, 1), Square::new(3, 2)));
        assert_eq!(move_to_text(mv), "b3-c4");

        // Not reachable from b3
        assert_eq!(parse_move(&g, "b3-b4"), None);
        // Claimed capture that does not exist
        assert_eq!(parse_move(&g, "b3xc4"), None);
        assert_eq!(parse_move(&g, "garbage"), None);
    }

    #[test]
    fn test_capture_text() {
        let b = Board::from_diagram(
            ".b......
             ..r.....
             ........
             ....r...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let g = GameState::from_board(b, Side::Black);
        let mv = parse_move(&g, "b1xd3").unwrap();
        assert_eq!(mv.captured, Some(Square::new(1, 2)));

        let chains = crate::movegen::jump_chains(&b, Square::new(0, 1));
        assert_eq!(chain_to_text(&chains[0]), "b1xd3xf5");
    }
}

use serde::{Deserialize, Serialize};

/// The two sides. Black sits on rows 0..=2 and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Black,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
    /// Row delta of a forward step for this side's men.
    pub fn forward(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::Red => -1,
        }
    }
    /// Row on which this side's men are crowned (the opponent's back rank).
    pub fn promotion_row(self) -> i8 {
        match self {
            Side::Black => 7,
            Side::Red => 0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    pub fn man(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }
    pub fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Diagonal directions this piece may step or jump along, as (row, col) deltas.
    pub fn directions(self) -> &'static [(i8, i8)] {
        const ALL: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
        match (self.rank, self.owner) {
            (Rank::King, _) => &ALL,
            (Rank::Man, Side::Black) => &ALL[..2],
            (Rank::Man, Side::Red) => &ALL[2..],
        }
    }
}

/// A board coordinate. Values outside 0..8 are representable so callers can
/// pass arbitrary input; every query treats them as empty, off-board squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
    /// Dark squares: the only ones pieces may occupy.
    pub fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let s = Square::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        s.is_on_board().then_some(s)
    }
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_on_board()
            .then(|| (self.row as usize, self.col as usize))
    }
}

/// Algebraic form: column 0..8 maps to `a`..`h`, row 0..8 to `1`..`8`.
/// Off-board squares print as raw coordinates.
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            write!(f, "{file}{}", self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// One step of play: a simple diagonal move or a single jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the jumped piece, if this is a capture.
    pub captured: Option<Square>,
    /// Set when a man ends its move on the opponent's back rank.
    pub promotes: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
            promotes: false,
        }
    }
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// A single jump available from some square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Jump {
    pub landing: Square,
    pub captured: Square,
}

/// Consecutive jumps by one piece; each link starts where the previous landed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpChain {
    pub links: Vec<Move>,
}

impl JumpChain {
    pub fn from(&self) -> Option<Square> {
        self.links.first().map(|m| m.from)
    }
    pub fn to(&self) -> Option<Square> {
        self.links.last().map(|m| m.to)
    }
    pub fn first(&self) -> Option<Move> {
        self.links.first().copied()
    }
    pub fn len(&self) -> usize {
        self.links.len()
    }
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    pub fn captures(&self) -> impl Iterator<Item = Square> + '_ {
        self.links.iter().filter_map(|m| m.captured)
    }
}

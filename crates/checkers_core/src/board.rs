use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseBoardError;
use crate::types::*;

/// 8x8 grid of optional pieces, row 0 first. A value type: every transformer
/// returns a new board and leaves `self` untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard setup: 12 Black men on rows 0..=2, 12 Red men on rows 5..=7,
    /// all on dark squares.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for row in 0..8i8 {
            let owner = match row {
                0..=2 => Side::Black,
                5..=7 => Side::Red,
                _ => continue,
            };
            for col in 0..8i8 {
                let s = Square::new(row, col);
                if s.is_playable() {
                    b.cells[row as usize][col as usize] = Some(Piece::man(owner));
                }
            }
        }
        b
    }

    /// Parse a diagram: 8 rows, row 0 first; `.` empty, `b`/`B` black man/king,
    /// `r`/`R` red man/king. Whitespace inside a row and blank lines are ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != 8 {
                return Err(ParseBoardError::RowWidth {
                    row,
                    len: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                let piece = match glyph {
                    '.' => continue,
                    'b' => Piece::man(Side::Black),
                    'B' => Piece::king(Side::Black),
                    'r' => Piece::man(Side::Red),
                    'R' => Piece::king(Side::Red),
                    _ => return Err(ParseBoardError::Glyph { glyph, row, col }),
                };
                if !Square::new(row as i8, col as i8).is_playable() {
                    return Err(ParseBoardError::NotPlayable { row, col });
                }
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let (r, c) = sq.index()?;
        self.cells[r][c]
    }

    pub fn count_pieces(&self, owner: Side) -> usize {
        self.pieces(owner).count()
    }

    /// Squares and pieces owned by `owner`, in row-major order.
    pub fn pieces(&self, owner: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| match cell {
                Some(pc) if pc.owner == owner => Some((Square::new(r as i8, c as i8), *pc)),
                _ => None,
            })
        })
    }

    /// Copy of this board with `sq` set to `piece`. Off-board squares are ignored.
    pub fn with_piece(&self, sq: Square, piece: Option<Piece>) -> Board {
        let mut b = *self;
        if let Some((r, c)) = sq.index() {
            b.cells[r][c] = piece;
        }
        b
    }

    /// Relocate the mover, drop the captured piece and crown if `mv.promotes`.
    /// No legality checks; an empty origin yields an unchanged copy.
    pub fn with_piece_moved(&self, mv: &Move) -> Board {
        let Some(mut piece) = self.piece_at(mv.from) else {
            return *self;
        };
        if mv.promotes {
            piece.rank = Rank::King;
        }
        let mut b = self.with_piece(mv.from, None);
        if let Some(cap) = mv.captured {
            b = b.with_piece(cap, None);
        }
        b.with_piece(mv.to, Some(piece))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    None => '.',
                    Some(Piece {
                        owner: Side::Black,
                        rank: Rank::Man,
                    }) => 'b',
                    Some(Piece {
                        owner: Side::Black,
                        rank: Rank::King,
                    }) => 'B',
                    Some(Piece {
                        owner: Side::Red,
                        rank: Rank::Man,
                    }) => 'r',
                    Some(Piece {
                        owner: Side::Red,
                        rank: Rank::King,
                    }) => 'R',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

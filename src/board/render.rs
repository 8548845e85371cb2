use std::fmt;

use super::{Board, Piece, Position};

const RANK_SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

/// Printable character for a square: the piece symbol (uppercase White,
/// lowercase Black) or a blank.
#[inline]
#[must_use]
pub fn render_square(piece: Option<&Piece>) -> char {
    piece.map_or(' ', Piece::symbol)
}

/// Grid with rank 8 on top and file letters underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RANK_SEPARATOR}")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                write!(f, " {} |", render_square(self.piece_at(Position(rank, file))))?;
            }
            writeln!(f)?;
            writeln!(f, "{RANK_SEPARATOR}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingSide;
use super::position::Position;

// Move flags (bit set)
const FLAG_CAPTURE: u8 = 1 << 0;
const FLAG_CASTLE_KINGSIDE: u8 = 1 << 1;
const FLAG_CASTLE_QUEENSIDE: u8 = 1 << 2;
// Reserved: no generator or executor path produces or honours these yet.
const FLAG_PROMOTION: u8 = 1 << 3;
const FLAG_EN_PASSANT: u8 = 1 << 4;

/// A move from one square to another plus descriptive flags.
///
/// Moves are plain values: produced by the generator, narrowed by the legal
/// filter and consumed by the executor. The executor reads the board, not the
/// capture flag, so a quiet-flagged move onto an enemy piece still captures.
///
/// `from` and `to` must be on the board; `apply_move` rejects a move naming
/// an off-board square with [`IllegalMoveError::OffBoard`].
///
/// [`IllegalMoveError::OffBoard`]: crate::board::IllegalMoveError::OffBoard
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Position,
    pub to: Position,
    flags: u8,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to, flags: 0 }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            flags: FLAG_CAPTURE,
        }
    }

    /// Create a castling move; `from`/`to` are the king's squares
    #[inline]
    #[must_use]
    pub const fn castle(side: CastlingSide, from: Position, to: Position) -> Self {
        let flags = match side {
            CastlingSide::Kingside => FLAG_CASTLE_KINGSIDE,
            CastlingSide::Queenside => FLAG_CASTLE_QUEENSIDE,
        };
        Move { from, to, flags }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Returns true if the generator saw an enemy piece on the destination
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags & FLAG_CAPTURE != 0
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0
    }

    /// Which side this castling move heads to, if it is one
    #[inline]
    #[must_use]
    pub const fn castling_side(self) -> Option<CastlingSide> {
        if self.flags & FLAG_CASTLE_KINGSIDE != 0 {
            Some(CastlingSide::Kingside)
        } else if self.flags & FLAG_CASTLE_QUEENSIDE != 0 {
            Some(CastlingSide::Queenside)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    /// True when both moves share origin and destination, whatever their flags
    #[inline]
    #[must_use]
    pub fn same_squares(self, other: Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

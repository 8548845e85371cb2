//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Returns true iff both coordinates fall inside the 8x8 board.
#[inline]
#[must_use]
pub const fn is_on_board(rank: isize, file: isize) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is the first rank (White's back rank), file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position(pub usize, pub usize); // (rank, file)

impl Position {
    /// Create a new position with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Position(rank, file))
        } else {
            None
        }
    }

    /// Whether both coordinates are inside the 8x8 grid
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Step by a signed offset, returning `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, df: isize) -> Option<Position> {
        let r = self.0 as isize + dr;
        let f = self.1 as isize + df;
        if is_on_board(r, f) {
            Some(Position(r as usize, f as usize))
        } else {
            None
        }
    }

    /// Get the position's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a position from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Position(idx / 8, idx % 8)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    #[inline]
    #[must_use]
    pub(crate) const fn rank_char(self) -> char {
        (b'1' + self.0 as u8) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(PositionError::FileOutOfBounds { file });
        }
        Ok(Position(rank, file))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = match file_ch {
            'a'..='h' => file_ch as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank_ch {
            '1'..='8' => rank_ch as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Position(rank, file))
    }
}

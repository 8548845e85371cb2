//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move heads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// File of the partner rook's home square
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File the king lands on (two files toward the rook)
    #[inline]
    #[must_use]
    pub const fn king_to_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// File the rook lands on, next to the king on the side it crossed from
    #[inline]
    #[must_use]
    pub const fn rook_to_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Files strictly between the king's home file and the rook's home file
    #[must_use]
    pub const fn between_files(self) -> &'static [usize] {
        match self {
            CastlingSide::Kingside => &[5, 6],
            CastlingSide::Queenside => &[1, 2, 3],
        }
    }

    /// The side whose rook lives on `file`, if it is a rook home file.
    #[inline]
    #[must_use]
    pub const fn from_rook_file(file: usize) -> Option<CastlingSide> {
        match file {
            7 => Some(CastlingSide::Kingside),
            0 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Rights only ever shrink during a game; there is no way to restore a
/// cleared flag short of building a fresh position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Check if the color keeps any castling right
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastlingSide::Kingside) || self.has(color, CastlingSide::Queenside)
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both castling rights of a color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastlingSide::Kingside);
        self.remove(color, CastlingSide::Queenside);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; unknown bits are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    pub(crate) fn grant(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN-style rendering: `KQkq`, subsets thereof, or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_is_per_color_and_side() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, CastlingSide::Queenside);
        assert!(rights.has(Color::White, CastlingSide::Kingside));
        assert!(!rights.has(Color::White, CastlingSide::Queenside));
        assert!(rights.has(Color::Black, CastlingSide::Queenside));

        rights.remove_color(Color::Black);
        assert!(!rights.has_any(Color::Black));
        assert!(rights.has_any(Color::White));
    }

    #[test]
    fn test_display() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::none().to_string(), "-");
        let mut rights = CastlingRights::none();
        rights.grant(Color::Black, CastlingSide::Queenside);
        rights.grant(Color::White, CastlingSide::Kingside);
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(CastlingSide::Kingside.king_to_file(), 6);
        assert_eq!(CastlingSide::Kingside.rook_to_file(), 5);
        assert_eq!(CastlingSide::Queenside.king_to_file(), 2);
        assert_eq!(CastlingSide::Queenside.rook_to_file(), 3);
        assert_eq!(CastlingSide::from_rook_file(0), Some(CastlingSide::Queenside));
        assert_eq!(CastlingSide::from_rook_file(4), None);
    }
}

//! Error types for rules-engine operations.

use std::fmt;

use super::types::{Color, Position};

/// Error raised by the move executor for moves that cannot be applied at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The origin square holds no piece
    EmptyOrigin { from: Position },
    /// The destination holds a piece of the mover's own color
    SelfCapture { from: Position, to: Position },
    /// A square lies outside the 8x8 grid
    OffBoard { square: Position },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::EmptyOrigin { from } => {
                write!(f, "No piece on {from} to move")
            }
            IllegalMoveError::SelfCapture { from, to } => {
                write!(f, "Move {from}{to} would capture a piece of its own color")
            }
            IllegalMoveError::OffBoard { square } => {
                write!(f, "Square {square:?} is off the board")
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error type for coordinate-notation (`e2e4`) failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Move string is not exactly 4 characters
    InvalidLength { len: usize },
    /// A file or rank symbol is out of range
    InvalidSquare { notation: String },
    /// Well-formed notation that names no legal move in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            NotationError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            NotationError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for position parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 3)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A rank that does not reach the h-file
    TooFewFiles { rank: usize, files: usize },
    /// More than one king of the same color
    TooManyKings { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 3 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::TooManyKings { color } => {
                write!(f, "More than one {color} king in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

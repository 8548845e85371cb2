//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the rules engine:
//! - `PieceType`, `Color` and `Piece` - what stands on a square
//! - `Position` - (rank, file) board coordinates
//! - `Move` - origin, destination and flags
//! - `CastlingRights` and `CastlingSide` - castling state

mod castling;
mod moves;
mod piece;
mod position;

pub use castling::{CastlingRights, CastlingSide};
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use position::{is_on_board, Position};

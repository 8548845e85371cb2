//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = GameState::default();
//! assert_eq!(game.to_play(), Color::White);
//! ```

pub use super::{
    create_initial_game, Color, GameState, GameStateBuilder, GameStatus, IllegalMoveError, Move,
    NotationError, Piece, PieceType, Player, Position, RulesConfig,
};

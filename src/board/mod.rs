//! Chess board representation and rules.
//!
//! Positions are immutable [`GameState`] snapshots. Move generation is split
//! into per-piece pseudo-legal generators, a check detector and a legal-move
//! filter that tries each candidate on a throwaway successor. Castling is
//! supported; en passant and promotion are not.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState};
//!
//! let game = GameState::default();
//! let moves = game.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod config;
mod error;
mod fen;
mod jump_tables;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod render;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use config::{CastlingSafety, RulesConfig};
pub use error::{FenError, IllegalMoveError, NotationError, PositionError};
pub use state::{create_initial_game, Board, GameState, Player, Square};
pub use status::GameStatus;
pub use types::{is_on_board, CastlingRights, CastlingSide, Color, Move, Piece, PieceType, Position};

// Generation table and rendering helpers
pub use movegen::{generator_for, GeneratorFn};
pub use render::render_square;

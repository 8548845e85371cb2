//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, PieceType, Position};
//!
//! let game = GameStateBuilder::new()
//!     .piece(Position(0, 4), Color::White, PieceType::King)
//!     .piece(Position(7, 4), Color::Black, PieceType::King)
//!     .piece(Position(1, 0), Color::White, PieceType::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.board().pieces().count(), 3);
//! ```

use super::{
    Board, CastlingRights, CastlingSide, Color, GameState, Piece, PieceType, Player, Position,
    RulesConfig,
};

/// A fluent builder for constructing `GameState` positions.
///
/// Pieces start out unmoved; use [`GameStateBuilder::moved`] to mark one
/// as having moved. No castling rights are granted unless asked for.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    config: RulesConfig,
    players: (Player, Player),
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            config: RulesConfig::default(),
            players: (
                Player::new("player 1", Color::White),
                Player::new("player 2", Color::Black),
            ),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameStateBuilder {
            board: Board::starting(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Start from an existing snapshot's position, side to move, rights,
    /// players and config. History and captures are not carried over.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        GameStateBuilder {
            board: state.board.clone(),
            side_to_move: state.to_play,
            castling_rights: state.castling_rights,
            config: state.config.clone(),
            players: (state.player1.clone(), state.player2.clone()),
        }
    }

    /// Place an unmoved piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, position: Position, color: Color, piece_type: PieceType) -> Self {
        self.board.put(Piece::new(color, piece_type, position));
        self
    }

    /// Mark the piece on `position` as having moved. No-op on an empty square.
    #[must_use]
    pub fn moved(mut self, position: Position) -> Self {
        if let Some(piece) = self.board.take(position) {
            self.board.put(Piece {
                has_moved: true,
                ..piece
            });
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.board.take(position);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.grant(color, CastlingSide::Kingside);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.grant(color, CastlingSide::Queenside);
        self
    }

    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn players(mut self, player1: Player, player2: Player) -> Self {
        self.players = (player1, player2);
        self
    }

    /// Build the snapshot. History, captures and game-over state start empty.
    #[must_use]
    pub fn build(self) -> GameState {
        let (player1, player2) = self.players;
        GameState::from_parts(
            self.board,
            player1,
            player2,
            self.side_to_move,
            self.castling_rights,
            self.config,
        )
    }
}

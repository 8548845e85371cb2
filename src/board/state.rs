use once_cell::sync::OnceCell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Move, Piece, PieceType, Position, RulesConfig};

/// One cell of the board; holds zero or one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(Option<Piece>);

impl Square {
    #[must_use]
    pub const fn empty() -> Self {
        Square(None)
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        self.0.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// 8x8 grid of squares indexed `[rank][file]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Square; 8]; 8],
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[Square::empty(); 8]; 8],
        }
    }

    /// The standard starting arrangement.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, piece_type) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                let back = Position(color.back_rank(), file);
                let pawn = Position(color.pawn_start_rank(), file);
                board.put(Piece::new(color, *piece_type, back));
                board.put(Piece::new(color, PieceType::Pawn, pawn));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn square_at(&self, pos: Position) -> &Square {
        debug_assert!(pos.is_valid(), "{pos:?} is off the board");
        &self.squares[pos.0][pos.1]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.square_at(pos).piece()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square_at(pos).is_empty()
    }

    /// Color of the piece on `pos`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, pos: Position) -> Option<Color> {
        self.piece_at(pos).map(|p| p.color)
    }

    /// All pieces in rank-major order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares
            .iter()
            .flat_map(|rank| rank.iter())
            .filter_map(Square::piece)
    }

    /// Pieces of one color in rank-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Linear scan for the king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|p| p.is(color, PieceType::King))
            .map(|p| p.position)
    }

    /// Place a piece on the square named by its own `position`.
    pub(crate) fn put(&mut self, piece: Piece) {
        self.squares[piece.position.0][piece.position.1] = Square(Some(piece));
    }

    /// Empty a square, returning what stood there.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.0][pos.1].0.take()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Player {
            name: name.into(),
            color,
        }
    }
}

/// Immutable snapshot of a game.
///
/// New snapshots are only produced by [`GameState::apply_move`]; older ones stay
/// valid and can be kept for history or undo. Legal-move lists are cached per
/// color on first request and never carried into successor states.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) player1: Player,
    pub(crate) player2: Player,
    pub(crate) to_play: Color,
    pub(crate) move_history: Vec<Move>,
    pub(crate) captured_pieces: Vec<Piece>,
    pub(crate) last_move: Option<Move>,
    pub(crate) is_game_over: bool,
    pub(crate) winner: Option<Color>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) config: RulesConfig,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) legal_cache: [OnceCell<Vec<Move>>; 2],
}

/// Create a game in the standard starting position with White to move.
#[must_use]
pub fn create_initial_game(player1: Player, player2: Player) -> GameState {
    GameState::new_game(player1, player2)
}

impl GameState {
    /// Standard starting position, White to move, all castling rights.
    #[must_use]
    pub fn new_game(player1: Player, player2: Player) -> Self {
        Self::with_config(player1, player2, RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(player1: Player, player2: Player, config: RulesConfig) -> Self {
        Self::from_parts(
            Board::starting(),
            player1,
            player2,
            Color::White,
            CastlingRights::all(),
            config,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        player1: Player,
        player2: Player,
        to_play: Color,
        castling_rights: CastlingRights,
        config: RulesConfig,
    ) -> Self {
        GameState {
            board,
            player1,
            player2,
            to_play,
            move_history: Vec::new(),
            captured_pieces: Vec::new(),
            last_move: None,
            is_game_over: false,
            winner: None,
            castling_rights,
            config,
            legal_cache: Default::default(),
        }
    }

    /// Copy of this snapshot with empty derived caches, ready to be edited
    /// into a successor.
    pub(crate) fn successor(&self) -> GameState {
        GameState {
            legal_cache: Default::default(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_play(&self) -> Color {
        self.to_play
    }

    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[must_use]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> (&Player, &Player) {
        (&self.player1, &self.player2)
    }

    /// The player holding `color`, if either does.
    #[must_use]
    pub fn player(&self, color: Color) -> Option<&Player> {
        [&self.player1, &self.player2]
            .into_iter()
            .find(|p| p.color == color)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new_game(
            Player::new("player 1", Color::White),
            Player::new("player 2", Color::Black),
        )
    }
}

/// Equality over game data only; cached legal-move lists are ignored.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.player1 == other.player1
            && self.player2 == other.player2
            && self.to_play == other.to_play
            && self.move_history == other.move_history
            && self.captured_pieces == other.captured_pieces
            && self.last_move == other.last_move
            && self.is_game_over == other.is_game_over
            && self.winner == other.winner
            && self.castling_rights == other.castling_rights
            && self.config == other.config
    }
}

impl Eq for GameState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_square_at_off_board_panics() {
        let _ = Board::empty().square_at(Position(8, 0));
    }

    #[test]
    fn test_empty_board_has_no_pieces() {
        let board = Board::empty();
        assert_eq!(board.pieces().count(), 0);
        for rank in 0..8 {
            for file in 0..8 {
                assert!(board.is_empty(Position(rank, file)));
            }
        }
    }

    #[test]
    fn test_starting_board_layout() {
        let board = Board::starting();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);

        for file in 0..8 {
            let white_pawn = board.piece_at(Position(1, file)).unwrap();
            assert!(white_pawn.is(Color::White, PieceType::Pawn));
            let black_pawn = board.piece_at(Position(6, file)).unwrap();
            assert!(black_pawn.is(Color::Black, PieceType::Pawn));
        }
        assert!(board
            .piece_at(Position(0, 3))
            .unwrap()
            .is(Color::White, PieceType::Queen));
        assert!(board
            .piece_at(Position(7, 4))
            .unwrap()
            .is(Color::Black, PieceType::King));
    }

    #[test]
    fn test_piece_positions_match_squares() {
        let board = Board::starting();
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(piece) = board.piece_at(Position(rank, file)) {
                    assert_eq!(piece.position, Position(rank, file));
                    assert!(!piece.has_moved);
                    assert!(!piece.captured);
                }
            }
        }
    }

    #[test]
    fn test_find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), Some(Position(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Position(7, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_new_game_defaults() {
        let game = create_initial_game(
            Player::new("alice", Color::White),
            Player::new("bob", Color::Black),
        );
        assert_eq!(game.to_play(), Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::all());
        assert!(game.move_history().is_empty());
        assert!(game.captured_pieces().is_empty());
        assert_eq!(game.last_move(), None);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.player(Color::Black).unwrap().name, "bob");
    }

    #[test]
    fn test_take_and_put() {
        let mut board = Board::starting();
        let knight = board.take(Position(0, 1)).unwrap();
        assert!(board.is_empty(Position(0, 1)));
        board.put(Piece {
            position: Position(2, 2),
            ..knight
        });
        assert_eq!(board.color_on(Position(2, 2)), Some(Color::White));
    }
}

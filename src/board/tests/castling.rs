//! Castling generation, execution and rights bookkeeping.

use crate::board::{
    CastlingRights, CastlingSafety, CastlingSide, Color, GameState, GameStateBuilder, Move,
    PieceType, Position, RulesConfig,
};

fn castles(game: &GameState, color: Color) -> Vec<CastlingSide> {
    game.legal_moves(color)
        .iter()
        .filter_map(|mv| mv.castling_side())
        .collect()
}

/// Italian opening with both kingside paths cleared.
fn italian() -> GameState {
    ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "b1c3", "f8c5"]
        .iter()
        .try_fold(GameState::default(), |g, mv| g.play(mv))
        .unwrap()
}

#[test]
fn test_no_castling_in_starting_position() {
    let game = GameState::default();
    assert!(castles(&game, Color::White).is_empty());
    assert!(castles(&game, Color::Black).is_empty());
}

#[test]
fn test_castle_after_development() {
    let game = italian();
    assert_eq!(castles(&game, Color::White), vec![CastlingSide::Kingside]);

    let game = game.play("e1g1").unwrap();
    let board = game.board();
    assert!(board
        .piece_at(Position(0, 6))
        .unwrap()
        .is(Color::White, PieceType::King));
    assert!(board
        .piece_at(Position(0, 5))
        .unwrap()
        .is(Color::White, PieceType::Rook));
    assert!(!game.castling_rights().has_any(Color::White));
    assert!(game.castling_rights().has(Color::Black, CastlingSide::Kingside));
    assert_eq!(
        game.last_move().and_then(|mv| mv.castling_side()),
        Some(CastlingSide::Kingside)
    );

    let game = game.play("e8g8").unwrap();
    assert_eq!(game.castling_rights(), CastlingRights::none());
}

#[test]
fn test_rights_lost_after_king_walk_and_return() {
    let game = ["e1e2", "e8e7", "e2e1", "e7e8"]
        .iter()
        .try_fold(
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap(),
            |g, mv| g.play(mv),
        )
        .unwrap();
    assert_eq!(game.castling_rights(), CastlingRights::none());
    assert!(castles(&game, Color::White).is_empty());
    assert!(castles(&game, Color::Black).is_empty());
}

#[test]
fn test_right_removed_when_rook_captured_at_home() {
    let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
        .unwrap()
        .play("a1a8")
        .unwrap();
    let rights = game.castling_rights();
    assert!(!rights.has(Color::White, CastlingSide::Queenside));
    assert!(!rights.has(Color::Black, CastlingSide::Queenside));
    assert!(rights.has(Color::White, CastlingSide::Kingside));
    assert!(rights.has(Color::Black, CastlingSide::Kingside));
    assert_eq!(rights.to_string(), "Kk");
}

#[test]
fn test_queenside_needs_b_file_clear_but_not_safe() {
    // b1 attacked by the rook on b8; the king never crosses b1
    let game = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert_eq!(castles(&game, Color::White), vec![CastlingSide::Queenside]);

    let blocked = GameStateBuilder::from_state(&game)
        .piece(Position(0, 1), Color::White, PieceType::Knight)
        .build();
    assert!(castles(&blocked, Color::White).is_empty());
}

#[test]
fn test_transit_square_safety_is_configurable() {
    let fen = "4kr2/8/8/8/8/8/8/4K2R w K - 0 1";
    let standard = GameState::from_fen(fen).unwrap();
    assert!(castles(&standard, Color::White).is_empty());

    let unchecked = GameStateBuilder::from_state(&standard)
        .config(RulesConfig {
            castling_safety: CastlingSafety::Unchecked,
            ..RulesConfig::default()
        })
        .build();
    assert_eq!(castles(&unchecked, Color::White), vec![CastlingSide::Kingside]);
}

#[test]
fn test_stale_castling_move_is_noop() {
    let game = italian();
    let castle = Move::castle(CastlingSide::Kingside, Position(0, 4), Position(0, 6));
    let moved_rook = game.play("h1f1").unwrap().play("a7a6").unwrap();

    let after = moved_rook.apply_move(&castle).unwrap();
    assert_eq!(after, moved_rook);
}

#[test]
fn test_castling_notation_resolves_to_flagged_move() {
    let game = italian();
    let mv = game.resolve_move("e1g1").unwrap();
    assert!(mv.is_castling());
    assert!(!mv.is_capture());
    assert_eq!(mv.to_uci(), "e1g1");
}

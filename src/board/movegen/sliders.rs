use super::super::jump_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{GameState, Move, Piece};

pub(crate) fn bishop_moves(state: &GameState, bishop: &Piece, moves: &mut Vec<Move>) {
    ray_moves(state, bishop, &BISHOP_DIRECTIONS, moves);
}

pub(crate) fn rook_moves(state: &GameState, rook: &Piece, moves: &mut Vec<Move>) {
    ray_moves(state, rook, &ROOK_DIRECTIONS, moves);
}

pub(crate) fn queen_moves(state: &GameState, queen: &Piece, moves: &mut Vec<Move>) {
    ray_moves(state, queen, &QUEEN_DIRECTIONS, moves);
}

/// Walk each ray until the edge. A friendly blocker ends the ray before its
/// square, an enemy blocker ends it after being captured.
fn ray_moves(state: &GameState, piece: &Piece, directions: &[(isize, isize)], moves: &mut Vec<Move>) {
    let from = piece.position;
    for &(dr, df) in directions {
        let mut cursor = from.offset(dr, df);
        while let Some(to) = cursor {
            match state.board.color_on(to) {
                None => moves.push(Move::new(from, to)),
                Some(color) if color == piece.color => break,
                Some(_) => {
                    moves.push(Move::capture(from, to));
                    break;
                }
            }
            cursor = to.offset(dr, df);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Color, GameState, GameStateBuilder, Move, PieceType, Position};

    fn moves_at(game: &GameState, pos: Position) -> Vec<Move> {
        game.pseudo_legal_moves(game.board().piece_at(pos).unwrap())
    }

    #[test]
    fn test_rook_in_corner_on_empty_board() {
        let game = GameStateBuilder::new()
            .piece(Position(0, 0), Color::White, PieceType::Rook)
            .build();
        assert_eq!(moves_at(&game, Position(0, 0)).len(), 14);
    }

    #[test]
    fn test_ray_truncated_by_enemy_inclusive() {
        let game = GameStateBuilder::new()
            .piece(Position(0, 0), Color::White, PieceType::Rook)
            .piece(Position(0, 3), Color::Black, PieceType::Knight)
            .build();
        let moves = moves_at(&game, Position(0, 0));
        // 3 along the rank (b1, c1, xd1) + 7 up the file
        assert_eq!(moves.len(), 10);
        assert!(moves.contains(&Move::capture(Position(0, 0), Position(0, 3))));
        assert!(!moves.iter().any(|mv| mv.to == Position(0, 4)));
    }

    #[test]
    fn test_ray_truncated_by_friend_exclusive() {
        let game = GameStateBuilder::new()
            .piece(Position(0, 0), Color::White, PieceType::Rook)
            .piece(Position(4, 0), Color::White, PieceType::Pawn)
            .build();
        let moves = moves_at(&game, Position(0, 0));
        // 3 up the file (a2..a4) + 7 along the rank
        assert_eq!(moves.len(), 10);
        assert!(!moves.iter().any(|mv| mv.to == Position(4, 0)));
    }

    #[test]
    fn test_bishop_center() {
        let game = GameStateBuilder::new()
            .piece(Position(3, 3), Color::Black, PieceType::Bishop)
            .build();
        assert_eq!(moves_at(&game, Position(3, 3)).len(), 13);
    }

    #[test]
    fn test_queen_is_union_of_rook_and_bishop() {
        let game = GameStateBuilder::new()
            .piece(Position(2, 5), Color::White, PieceType::Queen)
            .piece(Position(5, 5), Color::Black, PieceType::Pawn)
            .piece(Position(4, 3), Color::White, PieceType::Pawn)
            .build();
        let queen = moves_at(&game, Position(2, 5));

        let rook_game = GameStateBuilder::new()
            .piece(Position(2, 5), Color::White, PieceType::Rook)
            .piece(Position(5, 5), Color::Black, PieceType::Pawn)
            .piece(Position(4, 3), Color::White, PieceType::Pawn)
            .build();
        let bishop_game = GameStateBuilder::new()
            .piece(Position(2, 5), Color::White, PieceType::Bishop)
            .piece(Position(5, 5), Color::Black, PieceType::Pawn)
            .piece(Position(4, 3), Color::White, PieceType::Pawn)
            .build();
        let rook = moves_at(&rook_game, Position(2, 5));
        let bishop = moves_at(&bishop_game, Position(2, 5));

        assert_eq!(queen.len(), rook.len() + bishop.len());
        assert!(rook.iter().chain(bishop.iter()).all(|mv| queen.contains(mv)));
    }

    #[test]
    fn test_sliders_blocked_in_starting_position() {
        let game = GameState::default();
        for pos in [Position(0, 0), Position(0, 2), Position(0, 3)] {
            assert!(moves_at(&game, pos).is_empty());
        }
    }
}

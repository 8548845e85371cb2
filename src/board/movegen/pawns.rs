use super::super::{GameState, Move, Piece};

/// Pushes onto empty squares, the double step from the start rank, and
/// diagonal steps only when they capture.
pub(crate) fn pawn_moves(state: &GameState, pawn: &Piece, moves: &mut Vec<Move>) {
    let board = &state.board;
    let from = pawn.position;
    let dir = pawn.color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.is_empty(one) {
            moves.push(Move::new(from, one));

            if !pawn.has_moved && from.rank() == pawn.color.pawn_start_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(target) = from.offset(dir, df) {
            if board.color_on(target) == Some(pawn.color.opponent()) {
                moves.push(Move::capture(from, target));
            }
        }
    }
}

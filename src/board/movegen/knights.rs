use super::super::jump_tables::KNIGHT_TARGETS;
use super::super::{GameState, Move, Piece, Position};

pub(crate) fn knight_moves(state: &GameState, knight: &Piece, moves: &mut Vec<Move>) {
    push_jumps(state, knight, &KNIGHT_TARGETS[knight.position.as_index()], moves);
}

/// Single-step targets shared by knights and kings: own pieces block,
/// enemy pieces are captured.
pub(super) fn push_jumps(
    state: &GameState,
    piece: &Piece,
    targets: &[Position],
    moves: &mut Vec<Move>,
) {
    let from = piece.position;
    for &to in targets {
        match state.board.color_on(to) {
            None => moves.push(Move::new(from, to)),
            Some(color) if color != piece.color => moves.push(Move::capture(from, to)),
            Some(_) => {}
        }
    }
}

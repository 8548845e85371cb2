use super::super::jump_tables::KING_TARGETS;
use super::super::{CastlingSide, Color, GameState, Move, Piece, PieceType, Position};
use super::knights::push_jumps;

/// One-step moves plus castling candidates. Neither checks whether the
/// destination is attacked; the legal filter does that.
pub(crate) fn king_moves(state: &GameState, king: &Piece, moves: &mut Vec<Move>) {
    push_jumps(state, king, &KING_TARGETS[king.position.as_index()], moves);

    for side in CastlingSide::BOTH {
        if state.castling_preconditions_hold(king, side) {
            let to = Position(king.position.rank(), side.king_to_file());
            moves.push(Move::castle(side, king.position, to));
        }
    }
}

impl GameState {
    /// The board-level castling requirements: unmoved king on its home square,
    /// the right still held, the partner rook unmoved on its home square and
    /// nothing standing between them. Attacked squares are not considered.
    pub(crate) fn castling_preconditions_hold(&self, king: &Piece, side: CastlingSide) -> bool {
        let color = king.color;
        let rank = color.back_rank();

        if king.piece_type != PieceType::King
            || king.has_moved
            || king.position != Position(rank, 4)
            || !self.castling_rights.has(color, side)
        {
            return false;
        }

        let rook_ready = self
            .board
            .piece_at(Position(rank, side.rook_file()))
            .is_some_and(|rook| rook.is(color, PieceType::Rook) && !rook.has_moved);

        rook_ready
            && side
                .between_files()
                .iter()
                .all(|&file| self.board.is_empty(Position(rank, file)))
    }

    /// True when `color`'s king is the destination of some pseudo-legal move
    /// of the opponent. Pseudo-legal on purpose: a threat counts even if
    /// carrying it out would expose the attacker's own king.
    ///
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king_pos) = self.board.find_king(color) else {
            return false;
        };
        self.all_pseudo_legal_moves(color.opponent())
            .iter()
            .any(|mv| mv.to == king_pos)
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn to_play_in_check(&self) -> bool {
        self.is_in_check(self.to_play)
    }

    /// The king may not castle out of check or across an attacked square.
    /// The transit square is probed by stepping the king there on a
    /// throwaway snapshot; the destination is covered by the self-check test.
    pub(crate) fn castling_path_is_safe(&self, mv: &Move, color: Color) -> bool {
        if self.is_in_check(color) {
            return false;
        }
        let transit_file = (mv.from.file() + mv.to.file()) / 2;
        let transit = Move::new(mv.from, Position(mv.from.rank(), transit_file));
        self.apply_move(&transit)
            .is_ok_and(|probe| !probe.is_in_check(color))
    }
}

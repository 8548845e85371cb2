use super::error::IllegalMoveError;
use super::{CastlingSide, GameState, Move, Piece, PieceType, Position};

impl GameState {
    /// Apply `mv` and return the successor snapshot. `self` is never modified.
    ///
    /// Fails when the origin is empty or the destination holds a piece of the
    /// mover's color. A castling move whose preconditions no longer hold is
    /// a no-op and yields an identical snapshot.
    ///
    /// Turn order is not enforced here; moves drawn from
    /// `legal_moves(to_play())` are always accepted.
    pub fn apply_move(&self, mv: &Move) -> Result<GameState, IllegalMoveError> {
        if let Some(square) = [mv.from, mv.to].into_iter().find(|sq| !sq.is_valid()) {
            return Err(IllegalMoveError::OffBoard { square });
        }

        let mover = *self
            .board
            .piece_at(mv.from)
            .ok_or(IllegalMoveError::EmptyOrigin { from: mv.from })?;

        if self.board.color_on(mv.to) == Some(mover.color) {
            return Err(IllegalMoveError::SelfCapture {
                from: mv.from,
                to: mv.to,
            });
        }

        if let Some(side) = mv.castling_side() {
            return Ok(self.apply_castling(mv, &mover, side));
        }

        let mut next = self.successor();

        let victim = next.board.take(mv.to);
        if let Some(victim) = victim {
            next.forfeit_rook_right(&victim);
            next.captured_pieces.push(Piece {
                captured: true,
                ..victim
            });
        }

        next.board.take(mv.from);
        next.board.put(Piece {
            position: mv.to,
            has_moved: true,
            ..mover
        });

        match mover.piece_type {
            PieceType::King => next.forfeit_all_rights(&mover),
            PieceType::Rook => next.forfeit_rook_right(&mover),
            _ => {}
        }

        match victim {
            Some(victim) => log::debug!(
                "{} {} {mv} takes {}",
                mover.color,
                mover.piece_type,
                victim.piece_type
            ),
            None => log::debug!("{} {} {mv}", mover.color, mover.piece_type),
        }
        Ok(next.record(mv))
    }

    fn apply_castling(&self, mv: &Move, king: &Piece, side: CastlingSide) -> GameState {
        let rank = king.color.back_rank();
        let king_to = Position(rank, side.king_to_file());

        if mv.to != king_to || !self.castling_preconditions_hold(king, side) {
            log::debug!("castling {mv} no longer possible, position unchanged");
            return self.clone();
        }

        let mut next = self.successor();
        let rook_from = Position(rank, side.rook_file());
        let rook_to = Position(rank, side.rook_to_file());

        next.board.take(king.position);
        if let Some(rook) = next.board.take(rook_from) {
            next.board.put(Piece {
                position: rook_to,
                has_moved: true,
                ..rook
            });
        }
        next.board.put(Piece {
            position: king_to,
            has_moved: true,
            ..*king
        });
        next.forfeit_all_rights(king);

        log::debug!("{} castles {side:?} with {mv}", king.color);
        next.record(mv)
    }

    /// A king move costs its color both castling rights.
    fn forfeit_all_rights(&mut self, king: &Piece) {
        if self.castling_rights.has_any(king.color) {
            log::debug!("{} loses all castling rights", king.color);
            self.castling_rights.remove_color(king.color);
        }
    }

    /// A rook leaving (or captured on) its home square costs that side's right,
    /// whether or not the rook had moved before.
    fn forfeit_rook_right(&mut self, rook: &Piece) {
        if rook.piece_type != PieceType::Rook || rook.position.rank() != rook.color.back_rank() {
            return;
        }
        if let Some(side) = CastlingSide::from_rook_file(rook.position.file()) {
            if self.castling_rights.has(rook.color, side) {
                log::debug!("{} loses {side:?} castling right", rook.color);
                self.castling_rights.remove(rook.color, side);
            }
        }
    }

    fn record(mut self, mv: &Move) -> GameState {
        self.move_history.push(*mv);
        self.last_move = Some(*mv);
        self.to_play = self.to_play.opponent();
        self
    }
}

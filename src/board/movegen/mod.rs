//! Pseudo-legal generation, check detection and the legal-move filter.
//!
//! Generation is table driven: [`generator_for`] maps each [`PieceType`] to a
//! plain function, so pieces stay plain data and no trait objects are needed.

mod kings;
mod knights;
mod pawns;
mod sliders;

use parking_lot::Mutex;

use super::{CastlingSafety, Color, GameState, Move, Piece, PieceType};

/// Appends the pseudo-legal moves of one piece to the output list.
pub type GeneratorFn = fn(&GameState, &Piece, &mut Vec<Move>);

/// Move-generation table keyed by piece type.
#[must_use]
pub fn generator_for(piece_type: PieceType) -> GeneratorFn {
    match piece_type {
        PieceType::Pawn => pawns::pawn_moves,
        PieceType::Knight => knights::knight_moves,
        PieceType::Bishop => sliders::bishop_moves,
        PieceType::Rook => sliders::rook_moves,
        PieceType::Queen => sliders::queen_moves,
        PieceType::King => kings::king_moves,
    }
}

impl GameState {
    /// Moves consistent with the piece's geometry and board occupancy,
    /// ignoring whether they expose the mover's own king.
    #[must_use]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        generator_for(piece.piece_type)(self, piece, &mut moves);
        moves
    }

    /// Pseudo-legal moves of every piece of `color`, in board order.
    #[must_use]
    pub fn all_pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for piece in self.board.pieces_of(color) {
            generator_for(piece.piece_type)(self, piece, &mut moves);
        }
        moves
    }

    /// Legal moves for `color`: pseudo-legal moves that do not leave that
    /// color's king in check.
    ///
    /// This does not look at whose turn it is; callers offering moves to a
    /// player should ask for `to_play()` only. The list is computed once per
    /// snapshot and color.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> &[Move] {
        self.legal_cache[color.index()].get_or_init(|| self.compute_legal_moves(color))
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves_to_play(&self) -> &[Move] {
        self.legal_moves(self.to_play)
    }

    fn compute_legal_moves(&self, color: Color) -> Vec<Move> {
        let candidates = self.all_pseudo_legal_moves(color);
        let threads = self.config.filter_threads.min(candidates.len());
        if self.config.parallel_filter && threads > 1 {
            self.filter_parallel(&candidates, color, threads)
        } else {
            candidates
                .into_iter()
                .filter(|mv| self.is_legal_candidate(mv, color))
                .collect()
        }
    }

    /// Each candidate is tested on its own successor snapshot, so chunks can
    /// run on separate threads. Survivors come back in generator order.
    fn filter_parallel(&self, candidates: &[Move], color: Color, threads: usize) -> Vec<Move> {
        let chunk_size = candidates.len().div_ceil(threads);
        let survivors: Mutex<Vec<(usize, Move)>> = Mutex::new(Vec::with_capacity(candidates.len()));

        std::thread::scope(|scope| {
            for (chunk_idx, chunk) in candidates.chunks(chunk_size).enumerate() {
                let survivors = &survivors;
                scope.spawn(move || {
                    let base = chunk_idx * chunk_size;
                    let legal: Vec<(usize, Move)> = chunk
                        .iter()
                        .enumerate()
                        .filter(|(_, mv)| self.is_legal_candidate(mv, color))
                        .map(|(i, mv)| (base + i, *mv))
                        .collect();
                    survivors.lock().extend(legal);
                });
            }
        });

        let mut survivors = survivors.into_inner();
        survivors.sort_unstable_by_key(|&(idx, _)| idx);
        survivors.into_iter().map(|(_, mv)| mv).collect()
    }

    fn is_legal_candidate(&self, mv: &Move, color: Color) -> bool {
        if mv.is_castling()
            && self.config.castling_safety == CastlingSafety::Standard
            && !self.castling_path_is_safe(mv, color)
        {
            log::trace!("discarding {mv}: king passes through an attacked square");
            return false;
        }

        match self.apply_move(mv) {
            Ok(next) => {
                let exposed = next.is_in_check(color);
                if exposed {
                    log::trace!("discarding {mv}: leaves the {color} king in check");
                }
                !exposed
            }
            Err(err) => {
                log::trace!("discarding {mv}: {err}");
                false
            }
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves_to_play();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .filter_map(|mv| self.apply_move(mv).ok())
            .map(|next| next.perft(depth - 1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameStateBuilder, Position, RulesConfig};

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let game = GameState::default();
        let moves = game.legal_moves(Color::White);
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|mv| mv.from == Position(0, 1) || mv.from == Position(0, 6))
            .count();
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn test_black_also_has_twenty_moves_from_start() {
        let game = GameState::default();
        assert_eq!(game.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_generator_table_matches_piece_type() {
        let game = GameStateBuilder::new()
            .piece(Position(3, 3), Color::White, PieceType::Queen)
            .build();
        let queen = *game.board().piece_at(Position(3, 3)).unwrap();
        let via_table = {
            let mut moves = Vec::new();
            generator_for(PieceType::Queen)(&game, &queen, &mut moves);
            moves
        };
        assert_eq!(via_table, game.pseudo_legal_moves(&queen));
        assert_eq!(via_table.len(), 27);
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        // White king e1, white bishop e2 pinned by black rook e8
        let game = GameStateBuilder::new()
            .piece(Position(0, 4), Color::White, PieceType::King)
            .piece(Position(1, 4), Color::White, PieceType::Bishop)
            .piece(Position(7, 4), Color::Black, PieceType::Rook)
            .piece(Position(7, 0), Color::Black, PieceType::King)
            .build();
        let bishop_moves = game
            .legal_moves(Color::White)
            .iter()
            .filter(|mv| mv.from == Position(1, 4))
            .count();
        assert_eq!(bishop_moves, 0);
        assert!(!game
            .pseudo_legal_moves(game.board().piece_at(Position(1, 4)).unwrap())
            .is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let game = GameStateBuilder::new()
            .piece(Position(0, 4), Color::White, PieceType::King)
            .piece(Position(7, 3), Color::Black, PieceType::Rook)
            .piece(Position(7, 7), Color::Black, PieceType::King)
            .build();
        let legal = game.legal_moves(Color::White);
        assert!(legal.iter().all(|mv| mv.to.file() != 3));
        assert!(legal.iter().any(|mv| mv.to == Position(0, 5)));
    }

    #[test]
    fn test_parallel_filter_matches_sequential() {
        let config = RulesConfig {
            parallel_filter: true,
            filter_threads: 4,
            ..RulesConfig::default()
        };
        let sequential = GameState::default()
            .play("e2e4")
            .and_then(|g| g.play("e7e5"))
            .and_then(|g| g.play("d1h5"))
            .unwrap();
        let parallel = GameStateBuilder::from_state(&sequential)
            .config(config)
            .build();

        assert_eq!(
            sequential.legal_moves(Color::Black),
            parallel.legal_moves(Color::Black)
        );
        assert_eq!(
            sequential.legal_moves(Color::White),
            parallel.legal_moves(Color::White)
        );
    }

    #[test]
    fn test_legal_moves_are_cached_per_snapshot() {
        let game = GameState::default();
        let first = game.legal_moves(Color::White).as_ptr();
        let second = game.legal_moves(Color::White).as_ptr();
        assert_eq!(first, second);

        let next = game.apply_move(&game.legal_moves(Color::White)[0]).unwrap();
        assert_eq!(next.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_perft_shallow() {
        let game = GameState::default();
        assert_eq!(game.perft(0), 1);
        assert_eq!(game.perft(1), 20);
        assert_eq!(game.perft(2), 400);
    }
}

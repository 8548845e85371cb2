use std::str::FromStr;

use super::error::FenError;
use super::{
    CastlingRights, CastlingSide, Color, GameState, GameStateBuilder, Piece, PieceType, Position,
};

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Placement, side to move and castling fields are read; the en passant
    /// field and move counters are accepted and ignored. Pieces that cannot
    /// be on their original square (or whose castling flags are absent) are
    /// marked as having moved.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = GameStateBuilder::new();
        let mut placed: Vec<Piece> = Vec::new();
        let mut kings = [0usize; 2];

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece_type = PieceType::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if piece_type == PieceType::King {
                    kings[color.index()] += 1;
                    if kings[color.index()] > 1 {
                        return Err(FenError::TooManyKings { color });
                    }
                }
                let position = Position(rank, file);
                builder = builder.piece(position, color, piece_type);
                placed.push(Piece::new(color, piece_type, position));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastlingSide::Kingside),
                'Q' => (Color::White, CastlingSide::Queenside),
                'k' => (Color::Black, CastlingSide::Kingside),
                'q' => (Color::Black, CastlingSide::Queenside),
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            rights.grant(color, side);
        }

        for piece in placed.iter().filter(|p| !looks_unmoved(p, rights)) {
            builder = builder.moved(piece.position);
        }

        Ok(builder.side_to_move(side).castling(rights).build())
    }

    /// Convert the position to FEN notation.
    ///
    /// En passant is always `-` and the halfmove clock `0`; the fullmove
    /// number counts this snapshot's history from move 1.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.board.piece_at(Position(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.to_play {
            Color::White => "w",
            Color::Black => "b",
        };
        let fullmove = self.move_history.len() / 2 + 1;

        format!(
            "{} {} {} - 0 {}",
            rows.join("/"),
            active,
            self.castling_rights,
            fullmove
        )
    }
}

/// Whether `piece` may still be unmoved given where it stands and the
/// castling flags read alongside it.
fn looks_unmoved(piece: &Piece, rights: CastlingRights) -> bool {
    let color = piece.color;
    let Position(rank, file) = piece.position;
    match piece.piece_type {
        PieceType::Pawn => rank == color.pawn_start_rank(),
        PieceType::King => rank == color.back_rank() && file == 4 && rights.has_any(color),
        PieceType::Rook => {
            rank == color.back_rank()
                && CastlingSide::from_rook_file(file).is_some_and(|side| rights.has(color, side))
        }
        _ => true,
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_fen(s)
    }
}

use std::str::FromStr;

use super::error::NotationError;
use super::{GameState, Move, Position};

impl Move {
    /// Four-character coordinate text, origin then destination (`e2e4`).
    /// Flags are not encoded.
    #[must_use]
    pub fn to_uci(&self) -> String {
        self.to_string()
    }

    /// Decode coordinate text into a quiet move. Only the text is checked;
    /// whether the move exists in some position is up to
    /// [`GameState::resolve_move`].
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Move, Position};
    ///
    /// let mv = Move::from_uci("g1f3").unwrap();
    /// assert_eq!(mv.from, Position(0, 6));
    /// assert_eq!(mv.to, Position(2, 5));
    /// ```
    pub fn from_uci(text: &str) -> Result<Move, NotationError> {
        let len = text.chars().count();
        if len != 4 {
            return Err(NotationError::InvalidLength { len });
        }

        // Length is four characters; any multi-byte char fails the square parse.
        let invalid = || NotationError::InvalidSquare {
            notation: text.to_string(),
        };
        let (Some(from), Some(to)) = (text.get(0..2), text.get(2..4)) else {
            return Err(invalid());
        };
        let from: Position = from.parse().map_err(|_| invalid())?;
        let to: Position = to.parse().map_err(|_| invalid())?;

        Ok(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

impl GameState {
    /// Parse coordinate text and find the matching legal move for the side to
    /// move, carrying the generator's flags (capture, castling).
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let game = GameState::default();
    /// let mv = game.resolve_move("e2e4").unwrap();
    /// assert_eq!(mv.to_uci(), "e2e4");
    /// assert!(game.resolve_move("e2e5").is_err());
    /// ```
    pub fn resolve_move(&self, text: &str) -> Result<Move, NotationError> {
        let parsed = Move::from_uci(text.trim())?;
        self.legal_moves_to_play()
            .iter()
            .copied()
            .find(|mv| mv.same_squares(parsed))
            .ok_or_else(|| NotationError::IllegalMove {
                notation: text.trim().to_string(),
            })
    }

    /// Resolve `text` and apply it, returning the successor snapshot.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::GameState;
    ///
    /// let game = GameState::default().play("e2e4").unwrap().play("e7e5").unwrap();
    /// assert_eq!(game.move_history().len(), 2);
    /// ```
    pub fn play(&self, text: &str) -> Result<GameState, NotationError> {
        let mv = self.resolve_move(text)?;
        self.apply_move(&mv)
            .map_err(|_| NotationError::IllegalMove {
                notation: mv.to_uci(),
            })
    }
}

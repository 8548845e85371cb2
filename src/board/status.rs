use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, GameState};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl GameState {
    /// Classify the position from the side to move's point of view using
    /// check state and whether any legal move exists. Draw rules other than
    /// stalemate are not considered.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let in_check = self.to_play_in_check();
        let has_moves = !self.legal_moves_to_play().is_empty();
        match (in_check, has_moves) {
            (false, true) => GameStatus::Ongoing,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate {
                winner: self.to_play.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Snapshot with `is_game_over` and `winner` filled in when the position
    /// is checkmate or stalemate; otherwise an unchanged copy.
    #[must_use]
    pub fn conclude(&self) -> GameState {
        let status = self.status();
        if !status.is_terminal() {
            return self.clone();
        }
        let mut next = self.clone();
        next.is_game_over = true;
        next.winner = match status {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        };
        next
    }
}

//! Outcomes of placing a mark and of evaluating the board.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// State of a game as derived from its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress,
    /// A player holds a complete line.
    Won(Player),
    /// Board full, no complete line.
    Draw,
}

impl GameStatus {
    /// Derive the status of a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = board.winner() {
            GameStatus::Won(winner)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// True for `Won` and `Draw`.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Result line shown when a game ends; empty while in progress.
    #[must_use]
    pub fn result_text(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// A successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Cell that was marked.
    pub index: usize,
    /// Player who just moved.
    pub player: Player,
    /// Board after the move.
    pub board: Board,
}

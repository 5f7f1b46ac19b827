//! Player identification.
//!
//! ## Player
//!
//! Two seats, `First` and `Second`, shown as `X` and `O`.
//! `First` always opens a game; in computer mode `Second` is the computer.

use serde::{Deserialize, Serialize};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, shown as `X`.
    First,
    /// Moves second, shown as `O`.
    Second,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Display symbol for this player's mark.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

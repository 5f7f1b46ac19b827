//! Events emitted by a session.

use serde::{Deserialize, Serialize};

use crate::core::{Mode, Player};
use crate::rules::GameStatus;

/// Something a UI should react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell was marked.
    MarkPlaced { index: usize, player: Player },
    /// It is now this player's turn.
    TurnChanged(Player),
    /// The game ended.
    GameOver(GameStatus),
    /// The board was cleared, possibly in a new mode.
    Reset { mode: Mode },
}

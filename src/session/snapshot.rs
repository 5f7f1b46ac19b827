//! Read-only view of a session for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Mode, Player};
use crate::rules::{BoardEngine, GameStatus};

/// Everything a UI needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub mode: Mode,
    pub active: bool,
}

impl Snapshot {
    /// Capture the engine's current state.
    #[must_use]
    pub fn of(engine: &BoardEngine) -> Self {
        Self {
            board: *engine.board(),
            current_player: engine.current_player(),
            status: engine.status(),
            mode: engine.mode(),
            active: engine.is_active(),
        }
    }

    /// "Player X's turn" while playing, empty once the game is over.
    #[must_use]
    pub fn turn_text(&self) -> String {
        if self.status.is_over() {
            String::new()
        } else {
            format!("{}'s turn", self.current_player)
        }
    }

    /// Winner or draw line, empty while playing.
    #[must_use]
    pub fn result_text(&self) -> String {
        self.status.result_text()
    }

    /// Accessibility label for one cell.
    #[must_use]
    pub fn cell_label(&self, index: usize) -> Option<String> {
        self.board.get(index).map(|cell| match cell {
            Cell::Empty => "Empty cell".to_string(),
            Cell::Mark(player) => format!("Cell marked with {}", player.symbol()),
        })
    }

    #[must_use]
    pub fn mode_description(&self) -> &'static str {
        self.mode.description()
    }
}

//! The board engine.
//!
//! `BoardEngine` holds one game: the board, whose turn it is, whether
//! moves are still accepted, and the mode. Every mutation goes through
//! [`BoardEngine::place_mark`], [`BoardEngine::reset`] or
//! [`BoardEngine::set_mode`].
//!
//! ## Flow
//!
//! ```
//! use rust_ttt::core::{Mode, Player};
//! use rust_ttt::rules::{BoardEngine, GameStatus};
//!
//! let mut engine = BoardEngine::new(Mode::TwoPlayer);
//! for index in [0, 3, 1, 4, 2] {
//!     let placed = engine.place_mark(index).unwrap();
//!     if engine.evaluate_result().is_over() {
//!         assert_eq!(placed.player, Player::First);
//!     }
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::First));
//! assert!(engine.place_mark(5).is_none());
//! ```
//!
//! Illegal moves are rejected by returning `None` with no state change.
//! They are routine in a UI loop and are not errors.

use tracing::{debug, info, trace};

use crate::ai::{ComputerPolicy, HeuristicPolicy};
use crate::core::{Board, Cell, Mode, Player, RandomSource};

use super::status::{GameStatus, Placement};

/// One game of tic-tac-toe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    current_player: Player,
    active: bool,
    mode: Mode,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl BoardEngine {
    /// Create a fresh game in `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::First,
            active: true,
            mode,
        }
    }

    /// Resume from an existing position.
    ///
    /// The player to move is inferred from mark counts (`First` when equal),
    /// and the game is inactive if the board is already decided.
    #[must_use]
    pub fn from_position(board: Board, mode: Mode) -> Self {
        let current_player = if board.count(Player::First) > board.count(Player::Second) {
            Player::Second
        } else {
            Player::First
        };
        Self {
            board,
            current_player,
            active: !GameStatus::of(&board).is_over(),
            mode,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Player who made the last move (the one before the turn indicator).
    #[must_use]
    pub fn previous_player(&self) -> Player {
        self.current_player.opponent()
    }

    /// Whether placements are accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The computer's seat in the current mode, if any.
    #[must_use]
    pub fn computer_player(&self) -> Option<Player> {
        self.mode.computer_player()
    }

    /// Status derived from the board, without touching the active flag.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Mark `index` for the current player and pass the turn.
    ///
    /// Returns `None` without changing anything if the game is over,
    /// the index is off the board, or the cell is taken.
    pub fn place_mark(&mut self, index: usize) -> Option<Placement> {
        if !self.active {
            trace!(index, "placement rejected: game over");
            return None;
        }
        if !self.board.is_empty(index) {
            trace!(index, "placement rejected: cell unavailable");
            return None;
        }

        let player = self.current_player;
        self.board.set(index, Cell::Mark(player));
        self.current_player = player.opponent();
        debug!(index, ?player, "mark placed");

        Some(Placement {
            index,
            player,
            board: self.board,
        })
    }

    /// Check the board for a win or draw.
    ///
    /// Lines are scanned in fixed order (rows, columns, diagonals) and the
    /// first complete one decides the winner. The winner is the owner of
    /// that line, which in normal play is [`Self::previous_player`]: the
    /// turn has already passed by the time this is called.
    ///
    /// A finished game stops accepting placements.
    pub fn evaluate_result(&mut self) -> GameStatus {
        let status = self.status();
        if status.is_over() && self.active {
            self.active = false;
            info!(?status, "game over");
        }
        status
    }

    /// Pick the computer's next cell using the default heuristic.
    ///
    /// Reads the board only; apply the result with [`Self::place_mark`].
    ///
    /// # Panics
    ///
    /// If the board has no empty cell. A finished game should never ask
    /// for a computer move.
    pub fn compute_computer_move(&self, rng: &mut dyn RandomSource) -> usize {
        self.compute_move_with(&HeuristicPolicy, rng)
    }

    /// Pick the computer's next cell with a custom policy.
    pub fn compute_move_with(
        &self,
        policy: &dyn ComputerPolicy,
        rng: &mut dyn RandomSource,
    ) -> usize {
        let player = self.computer_player().unwrap_or(Player::Second);
        policy.choose_move(&self.board, player, rng)
    }

    /// Clear the board and start over with `First` to move. Keeps the mode.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::First;
        self.active = true;
        debug!(mode = %self.mode, "game reset");
    }

    /// Switch mode. Always restarts the game.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "mode changed");
        self.mode = mode;
        self.reset();
    }
}

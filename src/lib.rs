//! # rust-ttt
//!
//! A tic-tac-toe engine with a two-player mode and a heuristic computer
//! opponent, built to sit behind any UI.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: `BoardEngine` owns the game state and returns
//!    values. It never renders, waits, or reaches for global state.
//!
//! 2. **Silent Rejection**: illegal moves (taken cell, finished game,
//!    out of turn) return `None` or no events. They are not errors.
//!
//! 3. **Injected Randomness**: the computer's tie-breaks go through
//!    `RandomSource`, so tests and replays are deterministic.
//!
//! ## Modules
//!
//! - `core`: players, board, winning lines, configuration, RNG
//! - `rules`: the board engine and game status
//! - `ai`: computer move policies
//! - `session`: event-emitting driver for UI hosts
//! - `theme`: light/dark preference storage

pub mod core;
pub mod rules;
pub mod ai;
pub mod session;
pub mod theme;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, Board, Cell, WINNING_LINES,
    Mode, GameConfig,
    GameRng, RandomSource, SequenceSource,
};

pub use crate::rules::{BoardEngine, GameStatus, Placement};

pub use crate::ai::{ComputerPolicy, HeuristicPolicy, MoveTier};

pub use crate::session::{GameEvent, Session, Snapshot};

pub use crate::theme::{load_theme, toggle_theme, MemoryStore, PreferenceStore, Theme, THEME_KEY};

pub use crate::error::{Error, Result};

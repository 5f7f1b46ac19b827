//! Core types: players, the board, configuration, randomness.
//!
//! Nothing here knows about turns or game flow; that lives in `rules`.

pub mod player;
pub mod board;
pub mod config;
pub mod rng;

pub use player::Player;
pub use board::{parse_index, Board, Cell, CELL_COUNT, CENTER, CORNERS, SIDES, WINNING_LINES};
pub use config::{GameConfig, Mode};
pub use rng::{GameRng, RandomSource, SequenceSource};

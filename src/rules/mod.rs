//! Game rules: turn order, legal placement, terminal detection.
//!
//! `BoardEngine` owns one game's mutable state and is the only thing
//! that writes to the board. It never renders or sleeps.

pub mod engine;
pub mod status;

pub use engine::BoardEngine;
pub use status::{GameStatus, Placement};

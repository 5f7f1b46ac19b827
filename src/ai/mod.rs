//! Computer opponent.
//!
//! Policies are trait-based so a host can swap in its own:
//! - `ComputerPolicy`: pick a cell for the computer on a given board
//! - `HeuristicPolicy`: win, block, centre, corner, side
//!
//! Policies never see the engine, only a `Board` value, so they cannot
//! mutate game state.

pub mod heuristic;

pub use heuristic::{ComputerPolicy, HeuristicPolicy, MoveTier};

//! Event-emitting game session for UI hosts.
//!
//! A `Session` wraps a `BoardEngine` with configuration and an RNG and
//! reports every state change as a list of `GameEvent`s. A host renders
//! from those events or from a `Snapshot`, and never touches the engine
//! directly.
//!
//! ## Computer turns
//!
//! After a human move in computer mode, [`Session::is_computer_turn`]
//! becomes true. The host waits [`Session::computer_delay`] (for pacing
//! only) and then calls [`Session::computer_move`].

pub mod event;
pub mod snapshot;
mod game;

pub use event::GameEvent;
pub use game::Session;
pub use snapshot::Snapshot;

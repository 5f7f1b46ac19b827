//! Session driver.

use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{GameConfig, GameRng, Mode, Player, RandomSource};
use crate::rules::{BoardEngine, Placement};

use super::event::GameEvent;
use super::snapshot::Snapshot;

/// A game plus everything needed to run the computer side.
pub struct Session {
    engine: BoardEngine,
    config: GameConfig,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Session {
    /// Start a session; the computer's RNG is seeded from `config.seed`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Start a session with a caller-supplied random source.
    #[must_use]
    pub fn with_source(config: GameConfig, source: impl RandomSource + 'static) -> Self {
        Self {
            engine: BoardEngine::new(config.mode),
            config,
            rng: Box::new(source),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.engine)
    }

    /// Pacing delay a host should wait before [`Self::computer_move`].
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        self.config.computer_delay()
    }

    /// True when the computer should move next.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        self.engine.is_active()
            && self.engine.computer_player() == Some(self.engine.current_player())
    }

    /// Human move at `index`.
    ///
    /// Returns no events when the move is rejected: cell taken, game over,
    /// or the computer is due to move.
    pub fn play(&mut self, index: usize) -> Vec<GameEvent> {
        if self.is_computer_turn() {
            trace!(index, "human move rejected: computer to play");
            return Vec::new();
        }
        match self.engine.place_mark(index) {
            Some(placement) => self.settle(placement),
            None => Vec::new(),
        }
    }

    /// Let the computer move, if it is its turn.
    pub fn computer_move(&mut self) -> Vec<GameEvent> {
        if !self.is_computer_turn() {
            return Vec::new();
        }
        let index = self.engine.compute_computer_move(&mut *self.rng);
        match self.engine.place_mark(index) {
            Some(placement) => self.settle(placement),
            None => Vec::new(),
        }
    }

    /// Clear the board, keeping the mode.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.engine.reset();
        self.restarted()
    }

    /// Change mode and restart.
    pub fn set_mode(&mut self, mode: Mode) -> Vec<GameEvent> {
        self.config.mode = mode;
        self.engine.set_mode(mode);
        self.restarted()
    }

    fn settle(&mut self, placement: Placement) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::MarkPlaced {
            index: placement.index,
            player: placement.player,
        }];

        let status = self.engine.evaluate_result();
        if status.is_over() {
            events.push(GameEvent::GameOver(status));
        } else {
            events.push(GameEvent::TurnChanged(self.engine.current_player()));
        }
        debug!(?events, "move settled");
        events
    }

    fn restarted(&self) -> Vec<GameEvent> {
        vec![
            GameEvent::Reset {
                mode: self.engine.mode(),
            },
            GameEvent::TurnChanged(Player::First),
        ]
    }
}

//! Game configuration types.
//!
//! - `Mode`: who controls the second seat
//! - `GameConfig`: mode plus the computer's seed and pacing delay
//!
//! Configs are plain serde structs with `with_*` builders, so a host can
//! load them from whatever format it already uses.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::Error;

/// Who plays the second seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// `Player::Second` is the computer.
    VersusComputer,
}

impl Mode {
    /// The computer-controlled player in this mode, if any.
    #[must_use]
    pub const fn computer_player(self) -> Option<Player> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VersusComputer => Some(Player::Second),
        }
    }

    /// Stable identifier, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "two-player",
            Mode::VersusComputer => "versus-computer",
        }
    }

    /// Human-readable mode line.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Current mode: Two Players",
            Mode::VersusComputer => "Current mode: Play vs Computer",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-player" | "two_player" | "2p" => Ok(Mode::TwoPlayer),
            "versus-computer" | "versus_computer" | "computer" | "cpu" => Ok(Mode::VersusComputer),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting mode (default: two players).
    pub mode: Mode,

    /// Seed for the computer's corner/side tie-breaks.
    /// Same seed produces the same computer games.
    pub seed: u64,

    /// Pause the UI should insert before showing the computer's move.
    /// The engine never waits; this is advisory for callers.
    pub computer_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::TwoPlayer,
            seed: 42,
            computer_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Create a new config with the given mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom computer delay.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The computer pacing delay as a `Duration`.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, Mode::TwoPlayer);
        assert_eq!(config.seed, 42);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_mode(Mode::VersusComputer)
            .with_seed(123)
            .with_computer_delay(Duration::from_millis(0));

        assert_eq!(config.mode, Mode::VersusComputer);
        assert_eq!(config.seed, 123);
        assert_eq!(config.computer_delay_ms, 0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_mode(Mode::VersusComputer);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"versus-computer\""));
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.mode, Mode::TwoPlayer);
        assert_eq!(config.computer_delay_ms, 500);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("two-player".parse::<Mode>(), Ok(Mode::TwoPlayer));
        assert_eq!(" Computer ".parse::<Mode>(), Ok(Mode::VersusComputer));
        assert_eq!(
            "online".parse::<Mode>(),
            Err(Error::UnknownMode("online".to_string()))
        );
        for mode in [Mode::TwoPlayer, Mode::VersusComputer] {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_computer_player() {
        assert_eq!(Mode::TwoPlayer.computer_player(), None);
        assert_eq!(Mode::VersusComputer.computer_player(), Some(Player::Second));
    }

    #[test]
    fn test_description() {
        assert_eq!(Mode::TwoPlayer.description(), "Current mode: Two Players");
        assert_eq!(
            Mode::VersusComputer.description(),
            "Current mode: Play vs Computer"
        );
    }
}

//! Trainer configuration.
//!
//! A [`TrainerConfig`] can be built in code with the `with_*` builders or
//! loaded from a JSON file with the same field names:
//!
//! ```json
//! { "mode": "training", "game_mode": "turn-river", "player_count": 6, "position": "CO", "seed": 7 }
//! ```
//!
//! Missing fields fall back to the defaults (practice, preflop, 2 players, BTN).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TrainerError};
use crate::strategy::Position;

/// Fewest players at the table.
pub const MIN_PLAYERS: u8 = 2;
/// Most players at the table.
pub const MAX_PLAYERS: u8 = 9;

/// Whether the strategy is shown right away or only after a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Strategy revealed immediately.
    #[default]
    Practice,
    /// Strategy hidden until the user guesses.
    Training,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Practice, Mode::Training];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Practice => "practice",
            Mode::Training => "training",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TrainerError::UnknownMode(s.to_string()))
    }
}

/// How far a hand is played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Preflop decisions only.
    #[default]
    Preflop,
    /// Preflop then the flop.
    Postflop,
    /// All the way to the river.
    TurnRiver,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Preflop, GameMode::Postflop, GameMode::TurnRiver];

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Preflop => "preflop",
            GameMode::Postflop => "postflop",
            GameMode::TurnRiver => "turn-river",
        }
    }

    /// Human-readable name for menus.
    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Preflop => "Preflop",
            GameMode::Postflop => "Postflop",
            GameMode::TurnRiver => "Turn/River",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GameMode {
    type Err = TrainerError;

    /// Accepts "turn-river", "turn_river" and "turnriver" for the last mode.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "preflop" => Ok(GameMode::Preflop),
            "postflop" => Ok(GameMode::Postflop),
            "turnriver" => Ok(GameMode::TurnRiver),
            _ => Err(TrainerError::UnknownMode(s.to_string())),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub mode: Mode,
    pub game_mode: GameMode,

    /// Players at the table. Up to six use the 6-max tables, more use 9-max.
    pub player_count: u8,

    /// Hero position.
    pub position: Position,

    /// Random seed for reproducible deals. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Practice,
            game_mode: GameMode::Preflop,
            player_count: MIN_PLAYERS,
            position: Position::BTN,
            seed: None,
        }
    }
}

impl TrainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the reveal mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: set the game mode.
    pub fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Builder method: set the player count.
    pub fn with_players(mut self, player_count: u8) -> Self {
        self.player_count = player_count;
        self
    }

    /// Builder method: set the hero position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_player_count(self.player_count)
    }
}

/// Check that a player count is within the supported table sizes.
pub fn validate_player_count(player_count: u8) -> Result<()> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(TrainerError::InvalidPlayerCount(player_count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.mode, Mode::Practice);
        assert_eq!(config.game_mode, GameMode::Preflop);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.position, Position::BTN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let config = TrainerConfig::from_json_str(
            r#"{ "mode": "training", "game_mode": "turn-river", "player_count": 6, "position": "CO", "seed": 7 }"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Training);
        assert_eq!(config.game_mode, GameMode::TurnRiver);
        assert_eq!(config.player_count, 6);
        assert_eq!(config.position, Position::CO);
        assert_eq!(config.seed, Some(7));

        // Partial files use defaults for the rest
        let partial = TrainerConfig::from_json_str(r#"{ "player_count": 9 }"#).unwrap();
        assert_eq!(partial.mode, Mode::Practice);
        assert_eq!(partial.player_count, 9);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            TrainerConfig::from_json_str(r#"{ "player_count": 10 }"#),
            Err(TrainerError::InvalidPlayerCount(10))
        ));
        assert!(TrainerConfig::new().with_players(1).validate().is_err());
        assert!(matches!(
            TrainerConfig::from_json_str(r#"{ "position": "HJ" }"#),
            Err(TrainerError::Json(_))
        ));
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("Training".parse::<Mode>().unwrap(), Mode::Training);
        assert!("drill".parse::<Mode>().is_err());
        assert_eq!("turn-river".parse::<GameMode>().unwrap(), GameMode::TurnRiver);
        assert_eq!("Turn/River".parse::<GameMode>().unwrap(), GameMode::TurnRiver);
        assert_eq!("POSTFLOP".parse::<GameMode>().unwrap(), GameMode::Postflop);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            TrainerConfig::from_json_file("/nonexistent/trainer.json"),
            Err(TrainerError::Io(_))
        ));
    }
}

//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::Difficulty;
use tracing::{debug, info, instrument};

/// Settings for a run of computer-vs-computer games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    /// Tier playing X (moves first).
    #[serde(default = "default_x_difficulty")]
    x_difficulty: Difficulty,

    /// Tier playing O.
    #[serde(default = "default_o_difficulty")]
    o_difficulty: Difficulty,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for both players' random sources. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before each computer move is revealed, in milliseconds.
    #[serde(default)]
    think_delay_ms: u64,
}

fn default_x_difficulty() -> Difficulty {
    Difficulty::Hard
}

fn default_o_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_games() -> u32 {
    1
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x_difficulty: default_x_difficulty(),
            o_difficulty: default_o_difficulty(),
            games: default_games(),
            seed: None,
            think_delay_ms: 0,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }

        info!(
            x = %config.x_difficulty,
            o = %config.o_difficulty,
            games = config.games,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Overrides the X tier.
    pub fn with_x_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.x_difficulty = difficulty;
        self
    }

    /// Overrides the O tier.
    pub fn with_o_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.o_difficulty = difficulty;
        self
    }

    /// Overrides the number of games, clamped to at least one.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games.max(1);
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the thinking delay.
    pub fn with_think_delay_ms(mut self, millis: u64) -> Self {
        self.think_delay_ms = millis;
        self
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

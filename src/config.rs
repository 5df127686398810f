//! Engine configuration loaded from TOML.

use crate::games::tictactoe::{EMPTY_MARKER, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the command-line adapter.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side played by the engine; the human plays the other side.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Symbol for an empty cell in board input and output.
    #[serde(default = "default_empty_marker")]
    empty_marker: char,

    /// Whether to print the minimax score alongside engine moves.
    #[serde(default)]
    show_score: bool,
}

fn default_computer() -> Player {
    Player::O
}

fn default_empty_marker() -> char {
    EMPTY_MARKER
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computer: default_computer(),
            empty_marker: default_empty_marker(),
            show_score: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if matches!(config.empty_marker, 'X' | 'x' | 'O' | 'o') {
            return Err(ConfigError::new(format!(
                "Empty marker '{}' collides with a player mark",
                config.empty_marker
            )));
        }
        Ok(config)
    }

    /// Loads from `path` if given, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Side played by the human.
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }

    /// Overrides the engine's side.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

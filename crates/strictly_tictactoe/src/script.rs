//! TOML game scripts for replaying recorded games.
//!
//! ```toml
//! name = "top row"
//! moves = ["X 0 0", "O 1 1", "X 1 0", "O 2 2", "X 2 0"]
//! ```

use super::command::MoveCommand;
use super::error::BoardError;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// A named sequence of textual move commands.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameScript {
    /// Script name, used in logs.
    #[serde(default = "default_name")]
    name: String,

    /// Moves in play order, e.g. `"X 0 0"`.
    #[serde(default)]
    moves: Vec<String>,
}

fn default_name() -> String {
    "untitled".to_string()
}

impl GameScript {
    /// Creates a script from moves.
    pub fn new(name: impl Into<String>, moves: Vec<String>) -> Self {
        Self {
            name: name.into(),
            moves,
        }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        info!(name = %script.name, moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    /// Parses every move into a command.
    ///
    /// # Errors
    ///
    /// Returns the first move that fails to parse.
    pub fn commands<P: FromStr>(&self) -> Result<Vec<MoveCommand<P>>, BoardError> {
        self.moves.iter().map(|m| m.parse()).collect()
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
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

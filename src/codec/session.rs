//! A game bound to the config file it came from.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::config::{decode, encode};
use crate::core::{ConfigError, GameState};

/// Live game plus the path `save` writes back to.
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Board, points table, scores, and turn.
    pub state: GameState,

    origin: PathBuf,
}

impl GameSession {
    /// Wrap an existing state.
    pub fn new(state: GameState, origin: impl Into<PathBuf>) -> Self {
        Self {
            state,
            origin: origin.into(),
        }
    }

    /// Read and decode a config file.
    ///
    /// Unreadable files are `Io`; files that are not valid UTF-8 text are
    /// `InvalidFormat`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|_| ConfigError::invalid("config is not valid UTF-8"))?;
        let state = decode(&text)?;

        info!(
            path = %path.display(),
            size = state.board.size(),
            turn = state.turn.number(),
            "loaded game"
        );

        Ok(Self::new(state, path))
    }

    /// Overwrite the origin file with the current state.
    pub fn save(&self) -> Result<(), ConfigError> {
        fs::write(&self.origin, encode(&self.state))?;
        info!(path = %self.origin.display(), "saved game");
        Ok(())
    }

    /// Path this session was loaded from.
    #[must_use]
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

//! Error types for the engine.
//!
//! Load-time failures (`ConfigError`) are fatal for the process and map to
//! exit codes. Gameplay failures (`MoveError`) are advisory: they are shown
//! to the player and the session continues unchanged.

use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const WRONG_ARGUMENTS: u8 = 1;
    pub const CANNOT_OPEN_CONFIG: u8 = 2;
    pub const INVALID_CONFIG: u8 = 3;
    pub const OUT_OF_MEMORY: u8 = 4;
    /// Console input or output failed mid-game.
    pub const IO_FAILURE: u8 = 5;
}

/// Failure reading, decoding, or writing a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("out of memory while decoding config")]
    ResourceExhausted,
}

impl ConfigError {
    /// Shorthand for an `InvalidFormat` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::InvalidFormat(reason.into())
    }

    /// Exit code the binary uses when this error aborts a load.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::InvalidFormat(_) => exit_code::INVALID_CONFIG,
            ConfigError::Io(_) => exit_code::CANNOT_OPEN_CONFIG,
            ConfigError::ResourceExhausted => exit_code::OUT_OF_MEMORY,
        }
    }
}

impl From<std::collections::TryReserveError> for ConfigError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ConfigError::ResourceExhausted
    }
}

/// A rejected placement. The display text is what players see.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The word does not fit, uses unplayable letters, or conflicts with
    /// (or fails to connect to) letters already on the board.
    #[error("Impossible move!")]
    InvalidMove,

    /// A start coordinate lies outside the board.
    #[error("Insert parameters not valid!")]
    InvalidParams,
}

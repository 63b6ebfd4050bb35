//! # scrabble-engine
//!
//! A two-player, turn-based word placement game on a square letter grid.
//!
//! ## Design Principles
//!
//! 1. **One Persistence Format**: The whole game lives in a flat text
//!    config file. `codec::decode(codec::encode(s)) == s`.
//!
//! 2. **Typed Commands**: Input lines become a `Command` enum that carries
//!    only the fields its kind needs. Parsing never fails; bad input is a
//!    variant the controller reports.
//!
//! 3. **Validate, Then Apply**: The board only changes through a
//!    `rules::ValidMove`, which can only come from `rules::validate`.
//!
//! ## Modules
//!
//! - `core`: Cells, board, letter points, players, state, errors
//! - `codec`: Config file format and file-backed sessions
//! - `command`: Command grammar and parser
//! - `rules`: Placement legality and scoring
//! - `game`: Turn controller state machine and rendering
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod codec;
pub mod command;
pub mod rules;
pub mod game;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ConfigError, GameState, LetterPointTable, MoveError, Player, Scores,
};

pub use crate::codec::{decode, encode, GameSession};

pub use crate::command::{parse, Command, CommandKind, Orientation, Placement};

pub use crate::rules::{validate, Span, ValidMove};

pub use crate::game::{GameStatus, Outcome, TurnController};

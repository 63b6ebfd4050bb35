//! Core engine types: cells, board, letter points, players, state, errors.
//!
//! This module is pure data. Parsing, validation, and the turn loop live in
//! `codec`, `command`, `rules`, and `game`.

pub mod board;
pub mod cell;
pub mod error;
pub mod player;
pub mod points;
pub mod state;

pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use cell::{coordinate_index, coordinate_label, Cell, BLANK};
pub use error::{exit_code, ConfigError, MoveError};
pub use player::{Player, Scores};
pub use points::{LetterPointTable, MAX_LETTER_POINTS};
pub use state::GameState;

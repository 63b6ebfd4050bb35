//! Running a game.
//!
//! - `controller`: `TurnController` state machine, `GameStatus`, `Outcome`
//! - `render`: everything printed to the player

pub mod controller;
pub mod render;

pub use controller::{GameStatus, Outcome, TurnController};
pub use render::{prompt, render_board, render_game, HELP_TEXT};

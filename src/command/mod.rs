//! Player commands.
//!
//! `parse` turns an input line into a `Command`. It never fails:
//! unusable input becomes `Command::Malformed` or `Command::Unknown`, which
//! the turn controller reports back to the player.

pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{Command, CommandKind, Orientation, Placement};

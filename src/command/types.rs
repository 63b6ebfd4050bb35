//! Command representation.
//!
//! A command is a tagged variant carrying only the fields its kind needs:
//! - `insert a b h word` = `Insert(Placement)`
//! - `save`, `quit`, `help` = unit variants
//! - `load file.txt` = `Load { path }`
//!
//! Recognized commands with bad parameters become `Malformed`; anything
//! else is `Unknown` and keeps its first token for the error message.

use serde::{Deserialize, Serialize};

/// Direction a word is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Parse the `h`/`v` token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "h" => Some(Orientation::Horizontal),
            "v" => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Row and column step for one letter.
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// An `insert` request, not yet checked against a board.
///
/// Coordinates are kept as the raw letters typed so the validator can tell
/// an off-board coordinate from a word that runs off the edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Row letter (`'a'` = top row).
    pub row: char,

    /// Column letter (`'a'` = left column).
    pub col: char,

    pub orientation: Orientation,

    /// Word to place, lowercase.
    pub word: String,
}

impl Placement {
    /// Create a placement.
    pub fn new(row: char, col: char, orientation: Orientation, word: impl Into<String>) -> Self {
        Self {
            row,
            col,
            orientation,
            word: word.into(),
        }
    }

    /// Coordinate letter that advances as the word is written.
    #[must_use]
    pub fn leading_coordinate(&self) -> char {
        match self.orientation {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }
}

/// Command names that take parameters and can be malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    Insert,
    Load,
}

impl CommandKind {
    /// Message shown when this command's parameters are invalid.
    #[must_use]
    pub const fn invalid_params_message(self) -> &'static str {
        match self {
            CommandKind::Insert => "Insert parameters not valid!",
            CommandKind::Load => "Load parameters not valid!",
        }
    }
}

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Insert(Placement),
    Save,
    Quit,
    Help,
    Load { path: String },
    Malformed { kind: CommandKind },
    Unknown { raw_token: String },
}

impl Command {
    /// Check if this is a well-formed `insert`.
    #[must_use]
    pub fn is_insert(&self) -> bool {
        matches!(self, Command::Insert(_))
    }

    /// Check if parameters were missing or invalid.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Command::Malformed { .. })
    }
}

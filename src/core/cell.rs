//! Board cells and letter coordinates.

use serde::{Deserialize, Serialize};

/// Character used for an unoccupied cell in the config file and on screen.
pub const BLANK: char = ' ';

/// One grid position.
///
/// `points` is frozen when a letter is placed and is meaningless while the
/// cell is blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub points: u8,
}

impl Cell {
    /// An unoccupied cell.
    pub const BLANK: Cell = Cell {
        letter: None,
        points: 0,
    };

    /// A cell holding `letter` worth `points`.
    #[must_use]
    pub const fn placed(letter: char, points: u8) -> Self {
        Self {
            letter: Some(letter),
            points,
        }
    }

    /// Check if no letter occupies this cell.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.letter.is_none()
    }

    /// Check if this cell holds `letter`, ignoring ASCII case.
    #[must_use]
    pub fn holds(&self, letter: char) -> bool {
        self.letter.is_some_and(|l| l.eq_ignore_ascii_case(&letter))
    }

    /// The character written for this cell (`BLANK` when empty).
    #[must_use]
    pub fn symbol(&self) -> char {
        self.letter.unwrap_or(BLANK)
    }
}

/// Map a letter coordinate (`'a'` = 0) to a 0-based index.
///
/// Returns `None` for anything outside `'a'..'a' + size`.
#[must_use]
pub fn coordinate_index(coordinate: char, size: usize) -> Option<usize> {
    if !coordinate.is_ascii_lowercase() {
        return None;
    }
    let index = (coordinate as u8 - b'a') as usize;
    (index < size).then_some(index)
}

/// Label used on screen for a row or column index (`0` = `'A'`).
#[must_use]
pub fn coordinate_label(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}

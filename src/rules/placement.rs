//! Placement legality.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. The word must fit between its leading coordinate and the board edge.
//! 2. Every letter must be `a..=z`.
//! 3. Every letter must be a key of the letter-points table.
//! 4. Both start coordinates must be on the board.
//! 5. On a non-empty board, every covered cell must be blank or already hold
//!    the same letter, and at least one must hold the same letter.
//!
//! Failures 1-3 and 5 are `InvalidMove`; failure 4 is `InvalidParams`.

use serde::{Deserialize, Serialize};

use crate::command::{Orientation, Placement};
use crate::core::{coordinate_index, Board, LetterPointTable, MoveError};

/// The cells a word occupies: a start cell plus a direction and length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub len: usize,
}

impl Span {
    /// (row, col) of each covered cell, in writing order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.orientation.step();
        let (row, col) = (self.row, self.col);
        (0..self.len).map(move |i| (row + i * dr, col + i * dc))
    }
}

/// A placement that passed validation against a specific board.
///
/// Only obtainable from [`validate`]; apply it with
/// [`ValidMove::apply`](crate::rules::ValidMove::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidMove<'a> {
    pub span: Span,
    pub word: &'a str,
}

/// Check whether `placement` may be played on `board`.
pub fn validate<'a>(
    board: &Board,
    table: &LetterPointTable,
    placement: &'a Placement,
) -> Result<ValidMove<'a>, MoveError> {
    let size = board.size();
    let word = placement.word.as_str();
    let len = word.chars().count();

    let start = i64::from(u32::from(placement.leading_coordinate())) - i64::from(b'a');
    if start + len as i64 > size as i64 {
        return Err(MoveError::InvalidMove);
    }

    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(MoveError::InvalidMove);
    }

    if !word.chars().all(|c| table.contains(c)) {
        return Err(MoveError::InvalidMove);
    }

    let (Some(row), Some(col)) = (
        coordinate_index(placement.row, size),
        coordinate_index(placement.col, size),
    ) else {
        return Err(MoveError::InvalidParams);
    };

    let span = Span {
        row,
        col,
        orientation: placement.orientation,
        len,
    };

    // The first word may go anywhere; later words must connect.
    if !board.is_empty() {
        check_overlap(board, &span, word)?;
    }

    Ok(ValidMove { span, word })
}

fn check_overlap(board: &Board, span: &Span, word: &str) -> Result<(), MoveError> {
    let mut connected = false;

    for ((row, col), letter) in span.positions().zip(word.chars()) {
        let cell = board.get(row, col).ok_or(MoveError::InvalidMove)?;
        if cell.is_blank() {
            continue;
        }
        if !cell.holds(letter) {
            return Err(MoveError::InvalidMove);
        }
        connected = true;
    }

    if connected {
        Ok(())
    } else {
        Err(MoveError::InvalidMove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn table() -> LetterPointTable {
        LetterPointTable::from_pairs([('a', 1), ('b', 3), ('c', 3), ('d', 2)])
    }

    fn across(row: char, col: char, word: &str) -> Placement {
        Placement::new(row, col, Orientation::Horizontal, word)
    }

    fn down(row: char, col: char, word: &str) -> Placement {
        Placement::new(row, col, Orientation::Vertical, word)
    }

    #[test]
    fn test_span_positions() {
        let span = Span {
            row: 1,
            col: 2,
            orientation: Orientation::Vertical,
            len: 3,
        };
        let cells: Vec<_> = span.positions().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_first_move_anywhere() {
        let board = Board::new(4);
        let placement = across('c', 'a', "abcd");
        let valid = validate(&board, &table(), &placement).unwrap();
        assert_eq!(valid.span.row, 2);
        assert_eq!(valid.span.col, 0);
        assert_eq!(valid.span.len, 4);
    }

    #[test]
    fn test_word_too_long() {
        let board = Board::new(4);
        assert_eq!(
            validate(&board, &table(), &across('a', 'b', "abcd")),
            Err(MoveError::InvalidMove)
        );
        assert_eq!(
            validate(&board, &table(), &down('b', 'a', "abcd")),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_length_checked_along_orientation_only() {
        // Row 'd' is fine for a horizontal word starting in column 'a'.
        let board = Board::new(4);
        assert!(validate(&board, &table(), &across('d', 'a', "abcd")).is_ok());
    }

    #[test]
    fn test_non_letters_rejected() {
        let board = Board::new(4);
        assert_eq!(
            validate(&board, &table(), &across('a', 'a', "ab1")),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_letters_outside_table_rejected() {
        let board = Board::new(4);
        assert_eq!(
            validate(&board, &table(), &across('a', 'a', "abz")),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_off_board_coordinate_is_invalid_params() {
        let board = Board::new(4);
        // Column fits, row does not.
        assert_eq!(
            validate(&board, &table(), &across('e', 'a', "ab")),
            Err(MoveError::InvalidParams)
        );
        // Leading coordinate below 'a' passes the length check.
        assert_eq!(
            validate(&board, &table(), &across('a', '1', "ab")),
            Err(MoveError::InvalidParams)
        );
    }

    #[test]
    fn test_length_checked_before_coordinates() {
        let board = Board::new(4);
        assert_eq!(
            validate(&board, &table(), &across('a', 'z', "ab")),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_connection_required_after_first_move() {
        let mut board = Board::new(4);
        board.set(0, 0, Cell::placed('A', 1));

        // Shares the 'a' at (0, 0).
        assert!(validate(&board, &table(), &down('a', 'a', "abc")).is_ok());
        // Touches nothing.
        assert_eq!(
            validate(&board, &table(), &across('c', 'a', "abc")),
            Err(MoveError::InvalidMove)
        );
        // Conflicts with the 'a'.
        assert_eq!(
            validate(&board, &table(), &across('a', 'a', "bad")),
            Err(MoveError::InvalidMove)
        );
    }

    #[test]
    fn test_overlap_ignores_case_of_board_letters() {
        let mut board = Board::new(4);
        board.set(1, 1, Cell::placed('b', 3));
        assert!(validate(&board, &table(), &across('b', 'a', "abc")).is_ok());
    }
}

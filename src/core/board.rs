//! Square letter grid.
//!
//! Cells are stored row-major in an `im::Vector` so a board can be cloned
//! in O(1), e.g. while a replacement game is being decoded next to the live
//! one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, BLANK};
use super::points::LetterPointTable;

/// Smallest allowed board side.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest allowed board side (one coordinate letter per row).
pub const MAX_BOARD_SIZE: usize = 26;

/// Square grid of cells. The size never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "Board size must be between 4 and 26"
        );

        Self {
            size,
            cells: std::iter::repeat(Cell::BLANK).take(size * size).collect(),
        }
    }

    /// Build a board from row strings.
    ///
    /// Every non-blank character becomes a placed letter worth its value in
    /// `table`; letters missing from the table are worth 0. Rows must all be
    /// exactly `rows.len()` characters long.
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S], table: &LetterPointTable) -> Self {
        let mut board = Self::new(rows.len());

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            assert_eq!(line.chars().count(), board.size, "Board rows must be square");

            for (col, ch) in line.chars().enumerate() {
                if ch != BLANK {
                    board.set(row, col, Cell::placed(ch, table.points_or_zero(ch)));
                }
            }
        }

        board
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Get a cell, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).and_then(|i| self.cells.get(i))
    }

    /// Replace a cell. Returns `false` if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells.set(i, cell);
                true
            }
            None => false,
        }
    }

    /// A board is empty iff every cell is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }

    /// Iterate over the cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        let start = row * self.size;
        self.cells.iter().skip(start).take(self.size)
    }

    /// Row contents as text, `BLANK` for empty cells.
    #[must_use]
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).map(Cell::symbol).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LetterPointTable {
        LetterPointTable::from_pairs([('a', 1), ('b', 3), ('c', 3), ('d', 2)])
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert!(board.is_empty());
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.row_string(0), "    ");
    }

    #[test]
    #[should_panic(expected = "Board size must be between 4 and 26")]
    fn test_board_too_small() {
        let _ = Board::new(3);
    }

    #[test]
    #[should_panic(expected = "Board size must be between 4 and 26")]
    fn test_board_too_large() {
        let _ = Board::new(27);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut board = Board::new(4);
        assert!(board.set(3, 3, Cell::placed('A', 1)));
        assert!(!board.set(4, 0, Cell::placed('A', 1)));
        assert_eq!(board.get(3, 3), Some(&Cell::placed('A', 1)));
        assert_eq!(board.get(0, 4), None);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_from_rows_assigns_points() {
        let rows = ["AB  ", "    ", "  z ", "   d"];
        let board = Board::from_rows(&rows, &table());

        assert_eq!(board.get(0, 0), Some(&Cell::placed('A', 1)));
        assert_eq!(board.get(0, 1), Some(&Cell::placed('B', 3)));
        // Unknown letters are worth nothing.
        assert_eq!(board.get(2, 2), Some(&Cell::placed('z', 0)));
        assert_eq!(board.get(3, 3), Some(&Cell::placed('d', 2)));
        assert_eq!(board.occupied(), 4);
        assert_eq!(board.row_string(0), "AB  ");
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new(5);
        let mut copy = board.clone();
        copy.set(0, 0, Cell::placed('A', 1));
        assert!(board.is_empty());
        assert!(!copy.is_empty());
    }
}

//! Applying a validated move and scoring it.
//!
//! Only cells that were blank before the move score. A letter already on the
//! board keeps its frozen value and is never scored again.

use super::placement::ValidMove;
use crate::core::{Board, Cell, LetterPointTable};

impl ValidMove<'_> {
    /// Write the word onto `board` and return the points it earned.
    ///
    /// New letters are stored uppercase. Cells that already hold the
    /// matching letter are left untouched.
    pub fn apply(&self, board: &mut Board, table: &LetterPointTable) -> u32 {
        let mut gained = 0;

        for ((row, col), letter) in self.span.positions().zip(self.word.chars()) {
            if !board.get(row, col).is_some_and(Cell::is_blank) {
                continue;
            }
            let points = table.points_or_zero(letter);
            board.set(row, col, Cell::placed(letter.to_ascii_uppercase(), points));
            gained += u32::from(points);
        }

        gained
    }
}

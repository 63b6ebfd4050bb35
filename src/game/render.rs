//! Text output: game summary, board, help, prompts, and load errors.

use std::path::Path;

use crate::core::{coordinate_label, Board, ConfigError, GameState, LetterPointTable, Player};

/// Separators shown per letter-points summary line.
pub const SEPARATORS_PER_LINE: usize = 9;

/// Listing printed by the `help` command.
pub const HELP_TEXT: &str = "Commands:
 - insert <ROW> <COLUMN> <H/V> <WORD>
    <H/V> stands for H: horizontal, V: vertical.

 - help
    Prints this help text.

 - quit
    Terminates the game.

 - save
    Saves the game to the current config file.

 - load <CONFIGFILE>
    load config file and start game.
";

/// Full game view: a blank line, the points summary, then the board.
#[must_use]
pub fn render_game(state: &GameState) -> String {
    let mut out = String::from("\n");
    out.push_str(&render_points(&state.points));
    for (player, score) in state.scores.iter() {
        out.push_str(&format!("  P{}:{:5} Points\n", player.number(), score));
    }
    out.push_str(&render_board(&state.board));
    out
}

/// Letter-points table as written in the config file, uppercased.
///
/// Each space becomes `, ` and the line breaks after every ninth separator,
/// so `a1 e1` shows as `A1, E1` while a flat `a1e1` shows as `A1E1`.
#[must_use]
pub fn render_points(table: &LetterPointTable) -> String {
    let text = table.as_text();
    let mut out = String::with_capacity(text.len() * 2 + 1);
    let mut separators = 0;

    for ch in text.chars() {
        if ch == ' ' {
            out.push(',');
            separators += 1;
        }
        out.push(ch.to_ascii_uppercase());
        if separators == SEPARATORS_PER_LINE {
            out.push('\n');
            separators = 0;
        }
    }
    out.push('\n');
    out
}

/// Board with a column-letter header, a dashed rule, and row labels.
///
/// ```text
///  |ABCD
/// ------
/// A|ABCD
/// B|
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from(" |");

    out.extend((0..size).map(coordinate_label));
    out.push('\n');
    out.push_str(&"-".repeat(size + 2));
    out.push('\n');

    for row in 0..size {
        out.push(coordinate_label(row));
        out.push('|');
        out.push_str(&board.row_string(row));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Prompt shown before reading a command.
#[must_use]
pub fn prompt(turn: Player) -> String {
    format!("Player {} > ", turn.number())
}

/// Announcement for a finished game.
#[must_use]
pub fn win_message(player: Player, score: u32) -> String {
    format!("Player {} has won the game with {} points!", player.number(), score)
}

/// Message for a config file that could not be loaded.
#[must_use]
pub fn load_error_message(err: &ConfigError, path: &Path) -> String {
    match err {
        ConfigError::Io(_) => format!("Error: Cannot open file: {}", path.display()),
        ConfigError::InvalidFormat(_) => format!("Error: Invalid file: {}", path.display()),
        ConfigError::ResourceExhausted => "Error: Out of memory".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Scores};

    #[test]
    fn test_render_board() {
        let mut board = Board::new(4);
        for (col, letter) in "ABCD".chars().enumerate() {
            board.set(0, col, Cell::placed(letter, 1));
        }

        let expected = " |ABCD\n------\nA|ABCD\nB|    \nC|    \nD|    \n\n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_points_wraps_lines() {
        let mut table = LetterPointTable::from_pairs(
            "abcdefghij".chars().enumerate().map(|(i, c)| (c, i as u8)),
        );
        table.set_text("a0 b1 c2 d3 e4 f5 g6 h7 i8 j9");
        let expected = "A0, B1, C2, D3, E4, F5, G6, H7, I8, \nJ9\n";
        assert_eq!(render_points(&table), expected);
    }

    #[test]
    fn test_render_points_flat_text() {
        let table = LetterPointTable::from_pairs([('a', 1), ('b', 3)]);
        assert_eq!(render_points(&table), "A1B3\n");
    }

    #[test]
    fn test_render_points_empty() {
        assert_eq!(render_points(&LetterPointTable::new()), "\n");
    }

    #[test]
    fn test_render_game() {
        let mut table = LetterPointTable::from_pairs([('a', 1), ('b', 3)]);
        table.set_text("a1 b3");
        let mut state = GameState::new(4, table);
        state.scores = Scores::new(12, 7);

        let rendered = render_game(&state);
        assert!(rendered.starts_with("\nA1, B3\n  P1:   12 Points\n  P2:    7 Points\n |ABCD\n"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(prompt(Player::Two), "Player 2 > ");
        assert_eq!(
            win_message(Player::One, 9),
            "Player 1 has won the game with 9 points!"
        );
        assert_eq!(
            load_error_message(&ConfigError::invalid("x"), Path::new("c.txt")),
            "Error: Invalid file: c.txt"
        );
    }
}

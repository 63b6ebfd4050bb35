//! Input line tokenizer.
//!
//! Tokens are separated by any ASCII whitespace. The command name and the
//! `insert` operands are case-folded here; a `load` path is kept verbatim.
//! An empty line means "stop playing" and is handled by the console reader
//! before it gets here.

use smallvec::SmallVec;

use super::types::{Command, CommandKind, Orientation, Placement};

const INSERT: &str = "insert";
const SAVE: &str = "save";
const QUIT: &str = "quit";
const HELP: &str = "help";
const LOAD: &str = "load";

/// Tokens in the longest valid command (`insert ROW COL H|V WORD`).
const MAX_TOKENS: usize = 5;

/// Parse one input line.
///
/// Commands are matched case-insensitively: `SAVE` is `save`.
///
/// `save`, `quit`, and `help` ignore trailing tokens. `insert` needs exactly
/// four parameters with single-character coordinates and an `h`/`v`
/// orientation; `load` needs exactly one path.
///
/// ```
/// use scrabble_engine::command::{parse, Command, Orientation, Placement};
///
/// assert_eq!(
///     parse("insert a b v cab"),
///     Command::Insert(Placement::new('a', 'b', Orientation::Vertical, "cab")),
/// );
/// assert_eq!(parse("jump"), Command::Unknown { raw_token: "jump".into() });
/// ```
#[must_use]
pub fn parse(line: &str) -> Command {
    let tokens: SmallVec<[&str; MAX_TOKENS]> = line.split_whitespace().collect();

    let Some((&name, args)) = tokens.split_first() else {
        return Command::Unknown {
            raw_token: String::new(),
        };
    };

    let name = name.to_lowercase();
    match name.as_str() {
        INSERT => parse_insert(args),
        SAVE => Command::Save,
        QUIT => Command::Quit,
        HELP => Command::Help,
        LOAD => match args {
            [path] => Command::Load {
                path: (*path).to_string(),
            },
            _ => Command::Malformed {
                kind: CommandKind::Load,
            },
        },
        _ => Command::Unknown { raw_token: name },
    }
}

fn parse_insert(args: &[&str]) -> Command {
    let malformed = Command::Malformed {
        kind: CommandKind::Insert,
    };

    let [row, col, orientation, word] = args else {
        return malformed;
    };
    let (Some(row), Some(col), Some(orientation)) = (
        single_char(&row.to_lowercase()),
        single_char(&col.to_lowercase()),
        Orientation::from_token(&orientation.to_lowercase()),
    ) else {
        return malformed;
    };

    Command::Insert(Placement::new(row, col, orientation, word.to_lowercase()))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

//! Flat text config format.
//!
//! ```text
//! Scrabble
//! <row 0, exactly N characters, space = blank>
//! ...
//! <row N-1>
//! <turn: 1 or 2>
//! <player 1 score>
//! <player 2 score>
//! <letter points: a1e1i1..., separators allowed>
//! ```
//!
//! The letter-points line is written back as it was read.
//!
//! `decode(encode(s)) == s` for every valid state.

use tracing::warn;

use crate::core::{
    Board, ConfigError, GameState, LetterPointTable, Player, Scores, MAX_BOARD_SIZE,
    MIN_BOARD_SIZE,
};

/// First line of every config file, compared byte-for-byte.
pub const MAGIC: &str = "Scrabble";

/// Decode config text into a game state.
pub fn decode(text: &str) -> Result<GameState, ConfigError> {
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    if lines.next() != Some(MAGIC) {
        return Err(ConfigError::invalid("missing Scrabble marker"));
    }

    // Rows run until the first line that starts with a digit: the turn.
    let mut rows: Vec<&str> = Vec::new();
    let turn_line = loop {
        let line = lines
            .next()
            .ok_or_else(|| ConfigError::invalid("missing turn line"))?;
        if line.starts_with(|c: char| c.is_ascii_digit()) {
            break line;
        }
        if rows.len() == MAX_BOARD_SIZE {
            return Err(ConfigError::invalid("board has more than 26 rows"));
        }
        rows.try_reserve(1)?;
        rows.push(line);
    };

    let size = rows.len();
    if size < MIN_BOARD_SIZE {
        return Err(ConfigError::invalid(format!("board has {size} rows, need at least 4")));
    }
    if let Some((row, line)) = rows
        .iter()
        .enumerate()
        .find(|(_, line)| line.chars().count() != size)
    {
        return Err(ConfigError::invalid(format!(
            "row {row} has {} characters, expected {size}",
            line.chars().count()
        )));
    }

    let turn = parse_turn(turn_line)?;
    let player1 = parse_score(lines.next(), "player 1")?;
    let player2 = parse_score(lines.next(), "player 2")?;
    let points = parse_points(
        lines
            .next()
            .ok_or_else(|| ConfigError::invalid("missing letter points"))?,
    )?;

    if lines.any(|line| !line.trim().is_empty()) {
        warn!("ignoring content after the letter points line");
    }

    Ok(GameState {
        board: Board::from_rows(&rows, &points),
        points,
        scores: Scores::new(player1, player2),
        turn,
    })
}

/// Encode a game state as config text. No trailing newline is written.
#[must_use]
pub fn encode(state: &GameState) -> String {
    let size = state.board.size();
    let points = state.points.as_text();
    let mut out = String::with_capacity(MAGIC.len() + (size + 1) * size + 32 + points.len());

    out.push_str(MAGIC);
    out.push('\n');
    for row in 0..size {
        out.push_str(&state.board.row_string(row));
        out.push('\n');
    }
    out.push_str(&format!(
        "{}\n{}\n{}\n",
        state.turn.number(),
        state.scores[Player::One],
        state.scores[Player::Two]
    ));
    out.push_str(points);

    out
}

fn parse_turn(line: &str) -> Result<Player, ConfigError> {
    match line.as_bytes() {
        [digit] => Player::from_number(digit - b'0')
            .ok_or_else(|| ConfigError::invalid(format!("turn must be 1 or 2, got {line}"))),
        _ => Err(ConfigError::invalid(format!("turn must be a single digit, got {line:?}"))),
    }
}

fn parse_score(line: Option<&str>, who: &str) -> Result<u32, ConfigError> {
    let line = line.ok_or_else(|| ConfigError::invalid(format!("missing {who} score")))?;
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::invalid(format!("{who} score is not a number: {line:?}")));
    }
    line.bytes()
        .try_fold(0u32, |sum, b| sum.checked_mul(10)?.checked_add(u32::from(b - b'0')))
        .ok_or_else(|| ConfigError::invalid(format!("{who} score is too large")))
}

fn parse_points(line: &str) -> Result<LetterPointTable, ConfigError> {
    let mut table = LetterPointTable::new();
    let mut chars = line.chars().filter(|c| !c.is_ascii_whitespace());

    while let Some(letter) = chars.next() {
        if !letter.is_ascii_alphabetic() {
            return Err(ConfigError::invalid(format!("expected a letter in letter points, got {letter:?}")));
        }
        let points = chars
            .next()
            .and_then(|digit| digit.to_digit(10))
            .ok_or_else(|| ConfigError::invalid(format!("letter {letter:?} has no point digit")))?;
        if !table.insert(letter, points as u8) {
            return Err(ConfigError::invalid(format!("letter {letter:?} is listed twice")));
        }
    }

    table.set_text(line);
    Ok(table)
}

//! Letter-points table: the scoring value of each playable letter.
//!
//! The table is built once when a game is loaded and never changes during
//! play. The letter-points line is kept as written, separators included, so
//! the table re-encodes and displays exactly as it was read.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Highest point value a letter can carry (a single decimal digit).
pub const MAX_LETTER_POINTS: u8 = 9;

/// Mapping from lowercase letter to point value.
///
/// ## Example
///
/// ```
/// use scrabble_engine::core::LetterPointTable;
///
/// let table = LetterPointTable::from_pairs([('a', 1), ('b', 3)]);
///
/// assert_eq!(table.points('a'), Some(1));
/// assert_eq!(table.points('z'), None);
/// assert_eq!(table.points_or_zero('Z'), 0);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LetterPointTable {
    /// Pairs in the order they were defined.
    entries: Vec<(char, u8)>,

    /// Fast lookup, mirrors `entries`.
    lookup: FxHashMap<char, u8>,

    /// Source text of the table, e.g. `a1 b3`.
    text: String,
}

impl LetterPointTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (letter, points) pairs.
    ///
    /// Letters are folded to lowercase. A repeated letter keeps its first
    /// value; use [`LetterPointTable::insert`] to detect repeats.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, u8)>) -> Self {
        let mut table = Self::new();
        for (letter, points) in pairs {
            table.insert(letter, points);
        }
        table
    }

    /// Add a letter. Returns `false` (and leaves the table unchanged) if the
    /// letter is already present.
    pub fn insert(&mut self, letter: char, points: u8) -> bool {
        assert!(points <= MAX_LETTER_POINTS, "Letter points must be a single digit");

        let letter = letter.to_ascii_lowercase();
        if self.lookup.contains_key(&letter) {
            return false;
        }
        self.entries.push((letter, points));
        self.lookup.insert(letter, points);
        self.text.push(letter);
        self.text.push(char::from(b'0' + points));
        true
    }

    /// Replace the source text with the line the pairs were read from.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// The table as written in a config file.
    #[must_use]
    pub fn as_text(&self) -> &str {
        &self.text
    }

    /// Point value of a letter, if the letter is in the table.
    #[must_use]
    pub fn points(&self, letter: char) -> Option<u8> {
        self.lookup.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Point value of a letter, 0 for letters not in the table.
    #[must_use]
    pub fn points_or_zero(&self, letter: char) -> u8 {
        self.points(letter).unwrap_or(0)
    }

    /// Check if a letter is a key of the table.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.points(letter).is_some()
    }

    /// Number of letters in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (letter, points) pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.entries.iter().copied()
    }
}

impl PartialEq for LetterPointTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for LetterPointTable {}

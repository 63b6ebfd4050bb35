//! Player identification and per-player scores.
//!
//! ## Player
//!
//! The game always has exactly two players. `Player` doubles as the
//! turn marker: the current mover is whichever `Player` holds the turn.
//!
//! ## Scores
//!
//! One non-negative score per player, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in the order win checks run.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Player number as shown to users and stored in the config file (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Look up a player by its 1-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The player who moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based index into per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player score storage.
///
/// ## Example
///
/// ```
/// use scrabble_engine::core::{Player, Scores};
///
/// let mut scores = Scores::new(3, 0);
/// scores[Player::Two] += 7;
///
/// assert_eq!(scores[Player::One], 3);
/// assert_eq!(scores[Player::Two], 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Create scores for player 1 and player 2.
    #[must_use]
    pub const fn new(player1: u32, player2: u32) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Get a player's score.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.data[player.index()]
    }

    /// Add points to a player's score, returning the new total.
    pub fn add(&mut self, player: Player, points: u32) -> u32 {
        let score = &mut self.data[player.index()];
        *score = score.saturating_add(points);
        *score
    }

    /// Iterate over (Player, score) pairs, player 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

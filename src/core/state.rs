//! Game state: everything the config file persists.
//!
//! ## GameState
//!
//! - Board contents
//! - Letter-points table
//! - Both players' scores
//! - Whose turn it is
//!
//! The codec decodes text into a `GameState` and encodes it back; the turn
//! controller is the only thing that mutates one during play.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Player, Scores};
use super::points::LetterPointTable;

/// Complete persisted game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The letter grid.
    pub board: Board,

    /// Letter → points, fixed for the game.
    pub points: LetterPointTable,

    /// Per-player scores.
    pub scores: Scores,

    /// Player to move.
    pub turn: Player,
}

impl GameState {
    /// Create a fresh game: empty board, zero scores, player 1 to move.
    #[must_use]
    pub fn new(size: usize, points: LetterPointTable) -> Self {
        Self {
            board: Board::new(size),
            points,
            scores: Scores::default(),
            turn: Player::One,
        }
    }

    /// Score a player needs to win: half the board, rounded down.
    #[must_use]
    pub fn winning_score(&self) -> u32 {
        let size = self.board.size() as u32;
        size * size / 2
    }

    /// First player (player 1, then player 2) whose score reached the
    /// winning threshold.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        let threshold = self.winning_score();
        self.scores
            .iter()
            .find(|&(_, score)| score >= threshold)
            .map(|(player, _)| player)
    }

    /// Pass the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.other();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(4, LetterPointTable::new());
        assert!(state.board.is_empty());
        assert_eq!(state.turn, Player::One);
        assert_eq!(state.scores, Scores::new(0, 0));
    }

    #[test]
    fn test_winning_score_rounds_down() {
        assert_eq!(GameState::new(4, LetterPointTable::new()).winning_score(), 8);
        assert_eq!(GameState::new(5, LetterPointTable::new()).winning_score(), 12);
        assert_eq!(GameState::new(26, LetterPointTable::new()).winning_score(), 338);
    }

    #[test]
    fn test_winner_checks_player_one_first() {
        let mut state = GameState::new(4, LetterPointTable::new());
        assert_eq!(state.winner(), None);

        state.scores = Scores::new(7, 8);
        assert_eq!(state.winner(), Some(Player::Two));

        state.scores = Scores::new(8, 9);
        assert_eq!(state.winner(), Some(Player::One));
    }

    #[test]
    fn test_advance_turn() {
        let mut state = GameState::new(4, LetterPointTable::new());
        state.advance_turn();
        assert_eq!(state.turn, Player::Two);
        state.advance_turn();
        assert_eq!(state.turn, Player::One);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(4, LetterPointTable::from_pairs([('a', 1)]));
        state.scores = Scores::new(3, 5);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

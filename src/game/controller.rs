//! Turn controller: the game's state machine.
//!
//! ```text
//! Playing --quit--> Quit
//! Playing --any command, a score reaches size²/2--> Won(player)
//! ```
//!
//! The win check runs after every command except a malformed one. After
//! `quit` it still runs, so a game loaded already decided announces its
//! winner on the way out.
//!
//! Only an accepted `insert` passes the turn. Rejected moves, saves, help,
//! loads, and unknown input leave the mover unchanged.

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::render::{load_error_message, render_game, win_message, HELP_TEXT};
use crate::codec::GameSession;
use crate::command::{Command, CommandKind, Placement};
use crate::core::{GameState, MoveError, Player};
use crate::rules::validate;

/// Where the game is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Quit,
}

impl GameStatus {
    /// Check if no more commands will be accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// What a single command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Word placed; `points` added to `player`.
    Placed { player: Player, points: u32 },
    /// Insert refused; nothing changed.
    Rejected(MoveError),
    /// Parameters missing or invalid.
    Malformed(CommandKind),
    Saved,
    SaveFailed,
    Help,
    Loaded,
    LoadFailed,
    Quit,
    /// Unrecognized command; carries the echoed token.
    Unknown(String),
    /// The game had already ended; the command was ignored.
    Finished,
}

/// Drives one game session, one command at a time.
pub struct TurnController {
    session: GameSession,
    status: GameStatus,
}

impl TurnController {
    /// Start controlling a freshly loaded session.
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            status: GameStatus::Playing,
        }
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.session.state
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.session.state.turn
    }

    /// Release the session, e.g. for a final save by the caller.
    #[must_use]
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Print the opening view of the game.
    pub fn start<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", render_game(&self.session.state))
    }

    /// Apply one command, writing any player-facing output to `out`.
    ///
    /// Errors are only returned when `out` itself fails; game-level problems
    /// are reported to the player and reflected in the `Outcome`.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Outcome> {
        if self.status.is_terminal() {
            return Ok(Outcome::Finished);
        }
        debug!(?command, turn = self.turn().number(), "handling command");

        let outcome = match command {
            Command::Insert(placement) => self.insert(&placement, out)?,
            Command::Save => self.save(out)?,
            Command::Help => {
                write!(out, "{}", HELP_TEXT)?;
                Outcome::Help
            }
            Command::Load { path } => self.load(Path::new(&path), out)?,
            Command::Quit => {
                info!("player quit");
                self.status = GameStatus::Quit;
                Outcome::Quit
            }
            Command::Malformed { kind } => {
                writeln!(out, "Error: {}", kind.invalid_params_message())?;
                return Ok(Outcome::Malformed(kind));
            }
            Command::Unknown { raw_token } => {
                writeln!(out, "Error: Unknown command: {raw_token}")?;
                Outcome::Unknown(raw_token)
            }
        };

        self.check_winner(out)?;
        Ok(outcome)
    }

    fn insert<W: Write>(&mut self, placement: &Placement, out: &mut W) -> io::Result<Outcome> {
        let state = &mut self.session.state;

        let valid = match validate(&state.board, &state.points, placement) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(%err, ?placement, "rejected move");
                writeln!(out, "Error: {err}")?;
                return Ok(Outcome::Rejected(err));
            }
        };

        let player = state.turn;
        let points = valid.apply(&mut state.board, &state.points);
        let total = state.scores.add(player, points);
        debug!(player = player.number(), points, total, "placed word");

        write!(out, "{}", render_game(state))?;
        state.advance_turn();

        Ok(Outcome::Placed { player, points })
    }

    fn save<W: Write>(&mut self, out: &mut W) -> io::Result<Outcome> {
        match self.session.save() {
            Ok(()) => Ok(Outcome::Saved),
            Err(err) => {
                warn!(%err, path = %self.session.origin().display(), "save failed");
                writeln!(out, "Error: Could not save to file!")?;
                Ok(Outcome::SaveFailed)
            }
        }
    }

    fn load<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<Outcome> {
        match GameSession::load(path) {
            Ok(session) => {
                self.session = session;
                write!(out, "{}", render_game(&self.session.state))?;
                Ok(Outcome::Loaded)
            }
            Err(err) => {
                warn!(%err, path = %path.display(), "load failed");
                writeln!(out, "{}", load_error_message(&err, path))?;
                Ok(Outcome::LoadFailed)
            }
        }
    }

    fn check_winner<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let state = &self.session.state;
        if let Some(player) = state.winner() {
            let score = state.scores[player];
            info!(player = player.number(), score, "game won");
            writeln!(out, "{}", win_message(player, score))?;
            self.status = GameStatus::Won(player);
        }
        Ok(())
    }
}

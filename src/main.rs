//! `scrabble` binary: argument handling and the console loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use scrabble_engine::codec::GameSession;
use scrabble_engine::command::parse;
use scrabble_engine::core::exit_code;
use scrabble_engine::game::render::load_error_message;
use scrabble_engine::game::{prompt, TurnController};
use scrabble_engine::logging;

/// Printed when the argument count is wrong.
const USAGE: &str = "Usage: scrabble configfile";

#[derive(Parser)]
#[command(name = "scrabble", about = "Two-player word placement game", version)]
struct Cli {
    /// Config file to play from; `save` writes back to it
    config: PathBuf,
}

fn main() -> ExitCode {
    // Respects SCRABBLE_LOG / RUST_LOG
    logging::init_logging("warn");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::from(exit_code::WRONG_ARGUMENTS);
        }
    };

    let session = match GameSession::load(&cli.config) {
        Ok(session) => session,
        Err(err) => {
            println!("{}", load_error_message(&err, &cli.config));
            return ExitCode::from(err.exit_code());
        }
    };

    match play(session) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code::IO_FAILURE)
        }
    }
}

fn play(session: GameSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut controller = TurnController::new(session);
    controller.start(&mut out)?;

    while !controller.status().is_terminal() {
        write!(out, "{}", prompt(controller.turn()))?;
        out.flush()?;

        let Some(line) = read_command_line(&mut input)? else {
            break;
        };
        controller.handle(parse(&line), &mut out)?;
    }

    out.flush()?;
    Ok(())
}

/// Read one command as typed. `None` on end of input or an empty line.
fn read_command_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim_end_matches(['\n', '\r']).to_string();
    Ok((!line.is_empty()).then_some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrabble_engine::core::{GameState, LetterPointTable, Player};
    use scrabble_engine::game::Outcome;

    #[test]
    fn test_read_command_line() {
        let mut input = io::Cursor::new("INSERT A A H Word\r\n\nhelp");

        assert_eq!(
            read_command_line(&mut input).unwrap().as_deref(),
            Some("INSERT A A H Word")
        );
        assert_eq!(read_command_line(&mut input).unwrap(), None);
        assert_eq!(read_command_line(&mut input).unwrap().as_deref(), Some("help"));
        assert_eq!(read_command_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_load_keeps_mixed_case_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Other.txt");
        std::fs::write(&path, "Scrabble\n    \n    \n    \n    \n2\n3\n0\na1").unwrap();

        let mut input = io::Cursor::new(format!("LOAD {}\n", path.display()));
        let line = read_command_line(&mut input).unwrap().unwrap();

        let table = LetterPointTable::from_pairs([('b', 2)]);
        let state = GameState::new(4, table);
        let mut controller = TurnController::new(GameSession::new(state, "start.txt"));
        let mut out = Vec::new();

        let outcome = controller.handle(parse(&line), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Loaded);
        assert_eq!(controller.session().origin(), path.as_path());
        assert_eq!(controller.turn(), Player::Two);
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(USAGE, "Usage: scrabble configfile");
    }

    #[test]
    fn test_cli_requires_one_argument() {
        assert!(Cli::try_parse_from(["scrabble"]).is_err());
        assert!(Cli::try_parse_from(["scrabble", "a.txt", "b.txt"]).is_err());

        let cli = Cli::try_parse_from(["scrabble", "game.txt"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("game.txt"));
    }
}

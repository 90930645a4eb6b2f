//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Reads commands from stdin and answers on stdout. Searches run on the
//! engine's worker thread; a reporter thread prints `bestmove` when one
//! finishes, so `isready` is still answered while the engine thinks.

use std::fmt;
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use log::{debug, error, info, warn};

use crate::board::{Game, GameError};
use crate::engine::{EngineController, EngineOptions, SearchJob, MAX_DEPTH, MIN_DEPTH};

pub mod command;
pub mod options;
pub mod report;

use command::{parse_uci_command, UciCommand};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(GameError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: GameError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "{e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) | UciError::InvalidMove { error: e, .. } => Some(e),
            UciError::MissingParts => None,
        }
    }
}

/// Parse a UCI position command into a game.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN may omit
/// its move counters.
pub fn try_parse_position_command(parts: &[&str]) -> Result<Game, UciError> {
    let mut i = 1;

    let mut game = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Game::new()
        }
        Some(&"fen") => {
            i += 1;
            let end = parts[i..]
                .iter()
                .position(|part| *part == "moves")
                .map_or(parts.len(), |offset| i + offset);
            if end == i {
                return Err(UciError::MissingParts);
            }
            let fen = parts[i..end].join(" ");
            i = end;
            Game::from_fen(&fen).map_err(UciError::InvalidFen)?
        }
        _ => return Err(UciError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        for move_str in &parts[i + 1..] {
            let invalid = |error| UciError::InvalidMove {
                move_str: (*move_str).to_string(),
                error,
            };
            let mv = game.parse_uci_move(move_str).map_err(invalid)?;
            game.push(mv).map_err(invalid)?;
        }
    }

    Ok(game)
}

/// Run the UCI loop on stdin until `quit` or end of input.
pub fn run_uci_loop() {
    let stdin = io::stdin();
    run_uci(stdin.lock());
}

/// Run the UCI loop over any line source. Replies go to stdout.
pub fn run_uci<R: BufRead>(input: R) {
    let mut controller = EngineController::new(EngineOptions::default());
    let mut reporter: Option<JoinHandle<()>> = None;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read input: {err}");
                break;
            }
        };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => options::print_uci_info(&controller.options()),
            UciCommand::IsReady => report::print_ready(),
            UciCommand::UciNewGame => {
                if let Err(err) = controller.set_position(Game::new()) {
                    warn!("ucinewgame ignored: {err}");
                }
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(game) => {
                        if let Err(err) = controller.set_position(game) {
                            warn!("position ignored: {err}");
                        }
                    }
                    Err(err) => warn!("{err}"),
                }
            }
            UciCommand::Go { depth } => {
                let depth = depth
                    .unwrap_or(controller.options().depth)
                    .clamp(MIN_DEPTH, MAX_DEPTH);
                match controller.spawn_search_to_depth(depth, false) {
                    Ok(job) => {
                        finish_reporter(reporter.take());
                        reporter = Some(thread::spawn(move || report_search(job)));
                    }
                    Err(err) => warn!("go ignored: {err}"),
                }
            }
            UciCommand::SetOption { name, value } => {
                options::apply_setoption(&mut controller, &name, value.as_deref());
            }
            UciCommand::Eval => report::print_eval(controller.evaluate()),
            UciCommand::Display => report::print_position(&controller.fen(), controller.status()),
            UciCommand::Quit => break,
            UciCommand::Unknown(line) => debug!("unknown command: {line}"),
        }
    }

    // Let a running search report before exiting.
    finish_reporter(reporter.take());
    info!("uci loop finished");
}

fn report_search(job: SearchJob) {
    match job.wait() {
        Ok(result) => report::print_bestmove(result.best_move),
        Err(err) => {
            error!("search failed: {err}");
            report::print_bestmove(None);
        }
    }
}

fn finish_reporter(reporter: Option<JoinHandle<()>>) {
    if let Some(handle) = reporter {
        if handle.join().is_err() {
            error!("search reporter panicked");
        }
    }
}

//! ----- CONSOLE INPUT -----
//! Reads floor requests typed on the console and hands them to the request panel.
//! `c<N>` selects floor N from inside the cabin, `p<N>` calls the cabin to floor N
//! from a porch, `q` or `quit` stops reading.

/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::RequestPanel;
use crate::error::RequestError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cabin(u8),
    Porch(u8),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("unknown request source in {0:?}, expected 'c' or 'p'")]
    UnknownSource(String),

    #[error("{0:?} is not a floor number")]
    NotANumber(String),

    #[error(transparent)]
    Request(#[from] RequestError),
}

pub const ACCEPTED: &str = "input accepted";
pub const REJECTED: &str = "invalid input";

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let mut chars = line.chars();
    let source = chars.next().map(|c| c.to_ascii_lowercase());
    let number = chars.as_str().trim();
    let floor = || {
        number
            .parse::<u8>()
            .map_err(|_| InputError::NotANumber(number.to_string()))
    };

    match source {
        Some('c') => Ok(Command::Cabin(floor()?)),
        Some('p') => Ok(Command::Porch(floor()?)),
        _ => Err(InputError::UnknownSource(line.to_string())),
    }
}

/// Applies one parsed command to the panel. Returns `Ok(false)` when input should stop.
pub fn submit(panel: &RequestPanel, command: Command) -> Result<bool, InputError> {
    match command {
        Command::Cabin(floor) => panel.request_from_cabin(floor)?,
        Command::Porch(floor) => panel.request_from_porch(floor)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/**
 * Reads commands line by line until end of input, `quit`, or the elevator stops
 * accepting requests. Every line gets an accepted/rejected answer on `feedback`.
 *
 * The panel is dropped on return, which lets the dispatcher finish the queued
 * requests and stop.
 */
pub fn run<R: BufRead, W: Write>(panel: RequestPanel, reader: R, mut feedback: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        match parse_command(&line).and_then(|command| submit(&panel, command)) {
            Ok(true) => {
                debug!("Accepted request {:?}", line.trim());
                writeln!(feedback, "{}", ACCEPTED)?;
            }
            Ok(false) => break,
            Err(InputError::Request(RequestError::Closed)) => {
                warn!("Elevator stopped accepting requests");
                break;
            }
            Err(e) => {
                warn!("Rejected input: {}", e);
                writeln!(feedback, "{}", REJECTED)?;
            }
        }
    }

    info!("Console input finished");
    Ok(())
}

/// Usage lines shown at startup.
pub fn available_actions(n_floors: u8) -> Vec<String> {
    vec![
        "Available actions:".to_string(),
        format!("Call the elevator from a porch: type 'p<floor>' and press Enter (example: p{})", n_floors),
        "Select a floor inside the cabin: type 'c<floor>' and press Enter (example: c1)".to_string(),
        "Stop entering requests: type 'quit' or press Ctrl-D".to_string(),
    ]
}

/***************************************/
/*             Unit tests              */
/***************************************/

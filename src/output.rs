/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::StatusEvent;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn render(event: &StatusEvent, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => event.to_string(),
        OutputFormat::Json => serde_json::to_string(event).unwrap_or_else(|_| event.to_string()),
    }
}

/// Writes every status event as one line until the dispatcher drops its sender.
pub fn run<W: Write>(status_rx: cbc::Receiver<StatusEvent>, format: OutputFormat, mut out: W) -> io::Result<()> {
    for event in status_rx.iter() {
        writeln!(out, "{}", render(&event, format))?;
        out.flush()?;
    }
    debug!("Status output finished");
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/

use std::io::{BufRead, Write};

use torus::{execute_line, CommandError, Game, Response};
use tracing::{debug, trace};

/// How responses are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The plain text shown to players, errors prefixed with `Error, `.
    #[default]
    Text,
    /// One JSON object per line, for programs driving the game.
    Json,
}

pub struct Config {
    pub game: torus::Config,
    pub format: OutputFormat,
}

/// Reads commands line by line and answers each of them, until `quit` or
/// the end of the input.
///
/// Rule violations and malformed commands are reported to `output` and the
/// session goes on. Only I/O failures end it with an error.
pub fn run_session(
    mut input: impl BufRead,
    output: &mut impl Write,
    config: &Config,
) -> anyhow::Result<Game> {
    let mut game = Game::new(config.game);
    let mut buf = String::new();

    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            debug!("end of input");
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);
        trace!(line, "received command");

        let result = execute_line(line, &mut game);
        if let Ok(Response::Bye) = result {
            debug!("quit");
            break;
        }
        match config.format {
            OutputFormat::Text => write_text(&mut *output, &result)?,
            OutputFormat::Json => write_json(&mut *output, &result)?,
        }
        output.flush()?;
    }
    Ok(game)
}

fn write_text(
    output: &mut impl Write,
    result: &Result<Response, CommandError>,
) -> anyhow::Result<()> {
    match result {
        Ok(response) => writeln!(output, "{}", response)?,
        Err(err) => {
            debug!(%err, "command failed");
            writeln!(output, "Error, {}", err)?
        }
    }
    Ok(())
}

fn write_json(
    output: &mut impl Write,
    result: &Result<Response, CommandError>,
) -> anyhow::Result<()> {
    match result {
        Ok(response) => serde_json::to_writer(&mut *output, response)?,
        Err(err) => {
            debug!(%err, "command failed");
            let (kind, message) = match err {
                CommandError::Parse(err) => ("parse", err.to_string()),
                CommandError::Rule(err) => ("rule", err.to_string()),
            };
            let value = serde_json::json!({ "type": "Error", "kind": kind, "message": message });
            serde_json::to_writer(&mut *output, &value)?
        }
    }
    writeln!(output)?;
    Ok(())
}

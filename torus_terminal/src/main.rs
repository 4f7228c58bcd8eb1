use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use torus::{WinRule, DEFAULT_NUMBER_OF_TOKENS, MAX_TOKENS};
use torus_terminal::{run_session, Config, OutputFormat};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Read the commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write every response as a JSON object on its own line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// How many tokens are in the bag
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_NUMBER_OF_TOKENS,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_TOKENS))
    )]
    tokens: u8,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = Config {
        game: torus::Config {
            number_of_tokens: args.tokens,
            win_rule: WinRule::default(),
        },
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };
    info!(tokens = args.tokens, json = args.json, "starting session");

    let mut stdout = std::io::stdout().lock();
    let game = match args.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Could not open '{}'", path.display()))?;
            run_session(BufReader::new(file), &mut stdout, &config)?
        }
        None => run_session(std::io::stdin().lock(), &mut stdout, &config)?,
    };
    stdout.flush()?;

    info!(phase = ?game.phase(), moves = game.moves(), "session ended");
    Ok(())
}

// Logs go to stderr, stdout is reserved for the responses.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

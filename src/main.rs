//! Terminal memory game.
//!
//! ```bash
//! concentration                      # level 1, default catalog
//! concentration --level 3 --seed 42  # reproducible deck on level 3
//! concentration --config game.json   # custom symbols, levels and delays
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use concentration::terminal::{self, SystemClock, TerminalPresenter};
use concentration::{GameConfig, GameSession};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Find the pairs, clear the levels
#[derive(Parser, Debug)]
#[command(name = "concentration")]
#[command(about = "Memory-matching card game for the terminal")]
#[command(version)]
struct Args {
    /// JSON file overriding symbols, levels and delays
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level to start on (1-based)
    #[arg(short, long, default_value_t = 1)]
    level: usize,

    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    tracing::info!(levels = config.level_count(), "starting game");

    let presenter = TerminalPresenter::new();
    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(config, presenter, seed)?,
        None => GameSession::new(config, presenter)?,
    };
    if args.level != 1 {
        session.start_level(args.level)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    terminal::run(&mut session, stdin.lock(), &mut stdout, &mut SystemClock::new())?;
    Ok(())
}

//! Terminal falling-block game (default binary).
//!
//! Two threads share one session: this thread runs gravity and drawing, a
//! second one reads keys. The terminal is restored on every exit path.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use tetrominos::engine::{run_scheduler, spawn_input_thread, EngineError, MonotonicClock, Session};
use tetrominos::input::TerminalKeys;
use tetrominos::term::TerminalRenderer;
use tetrominos::types::POLL_INTERVAL_MS;

#[derive(Debug, Parser)]
#[command(name = "tetrominos", version, about = "Falling blocks in your terminal")]
struct Args {
    /// Seed for piece selection (default: derived from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Idle sleep between loop iterations, in milliseconds
    #[arg(long, default_value_t = POLL_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..=100))]
    poll_ms: u64,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let quantum = Duration::from_millis(args.poll_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, quantum);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, seed: u32, quantum: Duration) -> Result<()> {
    let shared = Session::shared(seed);
    let input = spawn_input_thread(&shared, TerminalKeys::default(), quantum)?;

    let clock = MonotonicClock::new();
    let scheduled = run_scheduler(&shared, &clock, term, quantum);

    let joined = input.join().map_err(|_| EngineError::InputPanicked)?;
    scheduled?;
    joined?;
    info!("session ended");
    Ok(())
}

fn init_logging(path: Option<&std::path::Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = path {
        let file = File::create(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

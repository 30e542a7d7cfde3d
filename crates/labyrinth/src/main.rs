//! Labyrinth of Treasures
//!
//! Main entry point for the game.

mod terminal;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};

use lab_core::{GameLoop, GameOptions, GameState, World};
use terminal::{Input, LineConsole, forward_lines};

/// Labyrinth of Treasures - find the chest, mind the traps
#[derive(Parser, Debug)]
#[command(name = "labyrinth")]
#[command(author, version, about = "Labyrinth of Treasures - a text exploration game", long_about = None)]
struct Args {
    /// Options file (TOML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of the terminal
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Verbose logging (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log filter, e.g. "debug" or "lab_core=trace"
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut options = match &args.config {
        Some(path) => GameOptions::load(path)?,
        None => GameOptions::default(),
    };
    if args.quiet {
        options.welcome = false;
    }
    if args.script.is_some() {
        options.echo_input = true;
    }

    init_logging(&args, &options);
    debug!("options: {options:?}");

    let world = World::labyrinth();
    world.validate().context("the labyrinth map is broken")?;
    let mut game = GameLoop::new(GameState::new(), world);

    let (tx, rx) = mpsc::channel();
    let interrupt = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt.send(Input::Interrupt);
    })
    .context("could not install the Ctrl-C handler")?;

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open script '{}'", path.display()))?;
            thread::spawn(move || forward_lines(BufReader::new(file), tx));
        }
        None => {
            thread::spawn(move || forward_lines(io::stdin().lock(), tx));
        }
    }

    let mut console = LineConsole::new(rx, io::stdout().lock(), options.echo_input);
    let result = game.run(&mut console, &options);
    if let Some(err) = console.take_error() {
        bail!("could not write game output: {err}");
    }

    info!(
        "game ended: {result:?} after {} steps",
        game.state().steps_taken
    );
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the CLI and the options file
fn init_logging(args: &Args, options: &GameOptions) {
    let filter = match (&args.log_level, args.verbose) {
        (Some(level), _) => level.clone(),
        (None, 0) => options.log_level.clone(),
        (None, 1) => "info".to_string(),
        (None, 2) => "debug".to_string(),
        (None, _) => "trace".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .target(env_logger::Target::Stderr)
        .init();
}

//! Terminal frontend for Hunt the Wumpus.

mod commands;
mod render;

use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wumpus",
    about = "Hunt the Wumpus: twenty caverns, one pit, one monster, one bullet",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace; logs go to stderr)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive hunt (the default)
    Play {
        /// RNG seed for a reproducible cave
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Reveal the cave a seed generates
    Map {
        /// RNG seed (the same seed as `play --seed` shows its first cave)
        #[arg(short, long)]
        seed: u64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Map { seed, json } => commands::map::run(seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Set up `env_logger`. `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

//! CLI frontend for the Delve dungeon game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "delve",
    about = "Delve — roll your way through a dungeon, one room at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through the dungeon
    Play {
        /// JSON room file (default: the built-in dungeon)
        #[arg(short, long)]
        rooms: Option<PathBuf>,

        /// RNG seed for reproducible rolls (default: seeded from the OS)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show the room description before every prompt, not just on entry
        #[arg(long)]
        repeat_narrative: bool,
    },

    /// Validate a JSON room file
    Check {
        /// Room file to validate
        file: PathBuf,
    },

    /// List the rooms of a dungeon
    Rooms {
        /// JSON room file (default: the built-in dungeon)
        #[arg(short, long)]
        rooms: Option<PathBuf>,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            rooms,
            seed,
            repeat_narrative,
        } => commands::play::run(rooms.as_deref(), seed, repeat_narrative),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Rooms { rooms } => commands::rooms::run(rooms.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

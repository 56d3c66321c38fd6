//! Conquista CLI - play the conquest game or simulate many games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use conquista::game::DEFAULT_PLAYER_COLOR;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

/// Conquista - A dice-driven territorial conquest game
#[derive(Parser, Debug)]
#[command(name = "conquista")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Faction color you play as
        #[arg(short, long, default_value = DEFAULT_PLAYER_COLOR)]
        color: String,

        /// Force a mission: 1 = destroy Verde, 2 = conquer 3 territories
        #[arg(short, long)]
        mission: Option<u32>,
    },

    /// Run many scripted games and aggregate statistics
    Simulate {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum attacks per game (default: 100)
        #[arg(short = 'r', long)]
        max_rounds: Option<u32>,

        /// Faction color the scripted player uses
        #[arg(short, long, default_value = DEFAULT_PLAYER_COLOR)]
        color: String,

        /// Force a mission id for every game
        #[arg(short, long)]
        mission: Option<u32>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimulateFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Play {
            seed,
            color,
            mission,
        } => cli::play::execute(seed, color, mission),

        Commands::Simulate {
            games,
            seed,
            threads,
            max_rounds,
            color,
            mission,
            format,
            progress,
        } => cli::simulate::execute(cli::simulate::SimulateOptions {
            games,
            seed,
            threads,
            max_rounds,
            color,
            mission,
            format,
            progress,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

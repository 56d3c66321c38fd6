//! Simulate command implementation.

use super::output::{
    JsonSimulationResult, SimulationStats, format_simulation_csv, format_simulation_text,
};
use super::play::parse_mission;
use super::{CliError, SimulateFormat};
use conquista::autoplay::{SimulationConfig, run_game};
use conquista::game::{Faction, GameConfig, time_seed};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Options for the simulate command.
#[derive(Debug, Clone)]
pub(crate) struct SimulateOptions {
    /// Number of games to run.
    pub(crate) games: u64,
    /// Starting seed (increments for each game).
    pub(crate) seed: Option<u64>,
    /// Parallel threads.
    pub(crate) threads: Option<usize>,
    /// Attack limit per game.
    pub(crate) max_rounds: Option<u32>,
    /// Player faction.
    pub(crate) color: String,
    /// Force a mission id for every game.
    pub(crate) mission: Option<u32>,
    /// Output format.
    pub(crate) format: SimulateFormat,
    /// Show progress bar.
    pub(crate) progress: bool,
}

/// Size the global thread pool; returns false if it was already built.
fn size_thread_pool(num_threads: usize) -> bool {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Could not size the thread pool to {num_threads}: {e}");
            false
        }
    }
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the options are invalid or output fails.
pub(crate) fn execute(options: SimulateOptions) -> Result<(), CliError> {
    let mission = options.mission.map(parse_mission).transpose()?;

    if let Some(num_threads) = options.threads {
        size_thread_pool(num_threads);
    }

    let base_seed = options.seed.unwrap_or_else(time_seed);

    let mut config = SimulationConfig {
        game: GameConfig {
            player: Faction::new(options.color),
            mission,
        },
        ..SimulationConfig::default()
    };
    if let Some(rounds) = options.max_rounds {
        config.max_rounds = rounds;
    }

    let pb = if options.progress {
        let pb = ProgressBar::new(options.games);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})",
            )
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    log::info!(
        "Simulating {} games from seed {base_seed} with {} threads",
        options.games,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    // Each thread folds into its own stats; merged at the end
    let stats = (0..options.games)
        .into_par_iter()
        .fold(SimulationStats::default, |mut local, i| {
            let result = run_game(base_seed.wrapping_add(i), &config);
            local.add_result(&result);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            local
        })
        .reduce(SimulationStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match options.format {
        SimulateFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats, base_seed));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SimulateFormat::Json => {
            let json_result = JsonSimulationResult::from_stats(&stats, base_seed);
            let json = serde_json::to_string_pretty(&json_result)?;
            println!("{json}");
        }
        SimulateFormat::Csv => {
            print!("{}", format_simulation_csv(&stats));
        }
    }

    Ok(())
}

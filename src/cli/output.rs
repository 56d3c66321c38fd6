//! Output formatting utilities for CLI.

use conquista::autoplay::{GameResult, Outcome};
use conquista::game::{BattleReport, Loser, Mission, MissionProgress, TerritoryStore};
use serde::Serialize;

const RULE: &str = "----------------------------------------------------------";

/// Format the board as a table.
pub(super) fn format_map(store: &TerritoryStore) -> String {
    let mut output = String::new();

    output.push_str("\n--- Current Map ---\n");
    output.push_str(&format!(
        "ID | {:<20} | {:<15} | {:<10}\n",
        "Territory", "Army", "Troops"
    ));
    output.push_str(RULE);
    output.push('\n');
    for (id, territory) in store.iter() {
        output.push_str(&format!(
            "{:<2} | {:<20} | {:<15} | {:<10}\n",
            id.get(),
            territory.name,
            territory.owner.as_str(),
            territory.troops
        ));
    }
    output.push_str(RULE);
    output.push('\n');

    output
}

/// Format the secret mission.
pub(super) fn format_mission(mission: &Mission) -> String {
    format!("\n--- Your Secret Mission ---\n{mission}\n----------------------------\n")
}

/// Format the action menu.
pub(super) fn format_menu() -> &'static str {
    "\n--- Actions ---\n1 - Attack\n2 - Check mission\n0 - Quit\n---------------\n"
}

/// Format a resolved battle round.
pub(super) fn format_battle(report: &BattleReport) -> String {
    let mut output = String::new();
    let join = |rolls: &[u8]| {
        rolls
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    output.push_str(&format!(
        "\n--- Battle: {} vs {} ---\n",
        report.attacker.name, report.defender.name
    ));
    output.push_str(&format!(
        "Attacker ({} - {} dice): {}\n",
        report.attacker.owner,
        report.attack_rolls.len(),
        join(&report.attack_rolls)
    ));
    output.push_str(&format!(
        "Defender ({} - {} dice): {}\n",
        report.defender_previous_owner,
        report.defense_rolls.len(),
        join(&report.defense_rolls)
    ));
    output.push_str(&format!(
        "-> Highest attack ({}) vs highest defense ({})\n",
        report.max_attack, report.max_defense
    ));
    match report.loser {
        Loser::Defender => {
            output.push_str("The attacker wins the comparison! Defender loses 1 troop.\n");
        }
        Loser::Attacker => {
            output.push_str("The defender wins or ties the comparison! Attacker loses 1 troop.\n");
        }
    }

    if report.conquered {
        output.push_str(&format!(
            "\nCONQUEST! {} took {} from {}.\n",
            report.attacker.owner, report.defender.name, report.defender_previous_owner
        ));
    }
    output.push_str(&format!(
        "Result: {} has {} troops. {} has {} troops.\n",
        report.attacker.name, report.attacker.troops, report.defender.name, report.defender.troops
    ));

    output
}

/// Format the answer to a mission check.
pub(super) fn format_mission_check(mission: &Mission, progress: &MissionProgress) -> String {
    let mut output = String::new();

    match mission {
        Mission::ConquerCount { .. } => output.push_str(&format!(
            "\nMission progress: {}/{} territories held.\n",
            progress.owned, progress.threshold
        )),
        Mission::DestroyFaction { target } => output.push_str(&format!(
            "\nMission progress: {} {} territories left.\n",
            progress.target_remaining, target
        )),
    }
    if progress.complete {
        output.push_str("\nVICTORY! You completed your mission. Congratulations!\n");
    } else {
        output.push_str("\nMission not complete yet. Keep attacking!\n");
    }

    output
}

/// Aggregated statistics over many scripted games.
#[derive(Debug, Default, Clone)]
pub(super) struct SimulationStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games won.
    pub(super) wins: u64,
    /// Games where no legal attack remained.
    pub(super) stuck: u64,
    /// Games stopped by the round limit.
    pub(super) round_limit: u64,
    /// Games played per mission id (index 0 = destroy, 1 = conquer).
    mission_games: [u64; 2],
    /// Games won per mission id.
    mission_wins: [u64; 2],
    /// Total rounds across all games.
    total_rounds: u64,
    /// Total conquests across all games.
    total_conquests: u64,
}

impl SimulationStats {
    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &GameResult) {
        self.games_played += 1;
        self.total_rounds += u64::from(result.rounds);
        self.total_conquests += u64::from(result.conquests);

        match result.outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Stuck => self.stuck += 1,
            Outcome::RoundLimit => self.round_limit += 1,
        }

        let slot = mission_slot(&result.mission);
        self.mission_games[slot] += 1;
        if result.won() {
            self.mission_wins[slot] += 1;
        }
    }

    /// Merge another set of stats into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.wins += other.wins;
        self.stuck += other.stuck;
        self.round_limit += other.round_limit;
        self.total_rounds += other.total_rounds;
        self.total_conquests += other.total_conquests;
        for i in 0..2 {
            self.mission_games[i] += other.mission_games[i];
            self.mission_wins[i] += other.mission_wins[i];
        }
    }

    /// Overall win rate (0.0-1.0).
    pub(super) fn win_rate(&self) -> f64 {
        ratio(self.wins, self.games_played)
    }

    /// Win rate for one mission (0.0-1.0).
    pub(super) fn mission_win_rate(&self, mission: &Mission) -> f64 {
        let slot = mission_slot(mission);
        ratio(self.mission_wins[slot], self.mission_games[slot])
    }

    /// Games played with one mission.
    pub(super) fn mission_games(&self, mission: &Mission) -> u64 {
        self.mission_games[mission_slot(mission)]
    }

    /// Get average game length.
    pub(super) fn avg_rounds(&self) -> f64 {
        ratio(self.total_rounds, self.games_played)
    }

    /// Get average conquests per game.
    pub(super) fn avg_conquests(&self) -> f64 {
        ratio(self.total_conquests, self.games_played)
    }
}

const fn mission_slot(mission: &Mission) -> usize {
    match mission {
        Mission::DestroyFaction { .. } => 0,
        Mission::ConquerCount { .. } => 1,
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        return 0.0;
    }
    num as f64 / den as f64
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult {
    /// First seed of the batch.
    base_seed: u64,
    /// Total games played.
    games_played: u64,
    /// Games won.
    wins: u64,
    /// Overall win rate.
    win_rate: f64,
    /// Games with no legal attack left.
    stuck: u64,
    /// Games stopped by the round limit.
    round_limit: u64,
    /// Average game length in rounds.
    avg_rounds: f64,
    /// Average conquests per game.
    avg_conquests: f64,
    /// Per-mission statistics.
    missions: Vec<JsonMissionStats>,
}

/// JSON-serializable per-mission stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonMissionStats {
    /// Mission label.
    mission: &'static str,
    /// Games played with this mission.
    games: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
}

fn all_missions() -> [Mission; 2] {
    [Mission::destroy_faction(), Mission::conquer_count()]
}

impl JsonSimulationResult {
    /// Create from stats.
    pub(super) fn from_stats(stats: &SimulationStats, base_seed: u64) -> Self {
        Self {
            base_seed,
            games_played: stats.games_played,
            wins: stats.wins,
            win_rate: stats.win_rate(),
            stuck: stats.stuck,
            round_limit: stats.round_limit,
            avg_rounds: stats.avg_rounds(),
            avg_conquests: stats.avg_conquests(),
            missions: all_missions()
                .iter()
                .map(|m| JsonMissionStats {
                    mission: m.label(),
                    games: stats.mission_games(m),
                    win_rate: stats.mission_win_rate(m),
                })
                .collect(),
        }
    }
}

/// Format simulation stats as human-readable text.
pub(super) fn format_simulation_text(stats: &SimulationStats, base_seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation Results ({} games, seeds from {base_seed})\n",
        stats.games_played
    ));
    output.push_str("========================================\n\n");

    output.push_str(&format!(
        "Wins: {} ({:.1}%)\n",
        stats.wins,
        stats.win_rate() * 100.0
    ));
    output.push_str(&format!("  No attack left: {}\n", stats.stuck));
    output.push_str(&format!("  Round limit: {}\n\n", stats.round_limit));

    output.push_str("By mission:\n");
    for mission in &all_missions() {
        output.push_str(&format!(
            "  {}: {:.1}% of {} games\n",
            mission.label(),
            stats.mission_win_rate(mission) * 100.0,
            stats.mission_games(mission)
        ));
    }

    output.push_str(&format!(
        "\nAverage Game Length: {:.1} rounds\n",
        stats.avg_rounds()
    ));
    output.push_str(&format!("Average Conquests: {:.2}\n", stats.avg_conquests()));

    output
}

/// Format simulation stats as CSV.
pub(super) fn format_simulation_csv(stats: &SimulationStats) -> String {
    let mut output = String::new();

    output.push_str("mission,games,win_rate\n");
    for mission in &all_missions() {
        output.push_str(&format!(
            "{},{},{:.4}\n",
            mission.label(),
            stats.mission_games(mission),
            stats.mission_win_rate(mission)
        ));
    }
    output.push_str(&format!("all,{},{:.4}\n", stats.games_played, stats.win_rate()));

    output
}

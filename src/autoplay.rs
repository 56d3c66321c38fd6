//! Scripted play for whole games.
//!
//! Provides a pure function interface: `(seed, config) -> GameResult`
//!
//! The scripted player always attacks from its strongest territory into the
//! weakest enemy territory. When the mission is to destroy a faction, that
//! faction's territories are attacked first. A game ends when the mission is
//! satisfied, no legal attack remains, or the round limit is hit.

use serde::Serialize;

use crate::game::{
    Dice, DiceSource, GameConfig, GameSession, Loser, Mission, TerritoryId, TerritoryStore,
    check_invariants, legal_attacks,
};

/// Configuration for scripted games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Session settings shared by every game.
    pub game: GameConfig,
    /// Maximum attacks before a game is abandoned.
    pub max_rounds: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_rounds: 100,
        }
    }
}

/// How a scripted game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The mission was satisfied.
    Won,
    /// No legal attack remained.
    Stuck,
    /// The round limit was reached.
    RoundLimit,
}

/// Result of a complete scripted game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    /// Seed the game was played with.
    pub seed: u64,
    /// Mission the player held.
    pub mission: Mission,
    /// How the game ended.
    pub outcome: Outcome,
    /// Attacks resolved.
    pub rounds: u32,
    /// Comparisons won by the player.
    pub battles_won: u32,
    /// Comparisons lost by the player.
    pub battles_lost: u32,
    /// Territories conquered by the player.
    pub conquests: u32,
    /// Board at the end of the game.
    pub final_store: TerritoryStore,
}

impl GameResult {
    /// Whether the player won.
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

/// Pick the scripted player's next attack, if any.
///
/// Prefers the attacker with the most troops, then the target faction (for
/// destroy missions), then the defender with the fewest troops, then the
/// lowest ids.
#[must_use]
pub fn choose_attack<D: DiceSource>(
    session: &GameSession<D>,
) -> Option<(TerritoryId, TerritoryId)> {
    let store = session.store();
    let target = match session.mission() {
        Mission::DestroyFaction { target } => Some(target),
        Mission::ConquerCount { .. } => None,
    };

    legal_attacks(store, session.player())
        .into_iter()
        .filter_map(|(a, d)| Some(((a, d), store.get(a)?, store.get(d)?)))
        .min_by_key(|&((a, d), attacker, defender)| {
            let off_target = target.is_some_and(|t| !defender.is_owned_by(t));
            (
                std::cmp::Reverse(attacker.troops),
                off_target,
                defender.troops,
                a,
                d,
            )
        })
        .map(|(order, _, _)| order)
}

/// Play one complete game from `seed`.
#[must_use]
pub fn run_game(seed: u64, config: &SimulationConfig) -> GameResult {
    let mut session = GameSession::new(config.game.clone(), Dice::from_seed(seed));
    let mut battles_won = 0;
    let mut battles_lost = 0;
    let mut conquests = 0;

    let outcome = loop {
        if session.check_mission() {
            break Outcome::Won;
        }
        if session.rounds() >= config.max_rounds {
            break Outcome::RoundLimit;
        }
        let Some((attacker, defender)) = choose_attack(&session) else {
            break Outcome::Stuck;
        };

        match session.attack(attacker, defender) {
            Ok(report) => {
                if report.loser == Loser::Defender {
                    battles_won += 1;
                } else {
                    battles_lost += 1;
                }
                if report.conquered {
                    conquests += 1;
                }
            }
            Err(e) => {
                // choose_attack only yields validated orders
                log::warn!("Seed {seed}: scripted order rejected: {e}");
                break Outcome::Stuck;
            }
        }
    };

    for violation in check_invariants(session.store()) {
        log::error!("Seed {seed}: {violation}");
    }
    log::debug!("Seed {seed}: {outcome:?} after {} rounds", session.rounds());

    GameResult {
        seed,
        mission: session.mission().clone(),
        outcome,
        rounds: session.rounds(),
        battles_won,
        battles_lost,
        conquests,
        final_store: session.store().clone(),
    }
}

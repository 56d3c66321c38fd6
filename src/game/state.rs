//! Game session state.

use crate::error::AttackError;
use crate::game::{
    BattleReport, DiceSource, Faction, Mission, MissionProgress, TerritoryId, TerritoryStore,
    mission_progress, resolve_battle, select_random_mission, validate_attack,
};

/// Faction the player controls unless configured otherwise.
pub const DEFAULT_PLAYER_COLOR: &str = "Azul";

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Faction the player controls.
    pub player: Faction,
    /// Force a mission instead of drawing one.
    pub mission: Option<Mission>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: Faction::from(DEFAULT_PLAYER_COLOR),
            mission: None,
        }
    }
}

/// A single-player game: board, secret mission and dice.
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    store: TerritoryStore,
    mission: Mission,
    player: Faction,
    dice: D,
    rounds: u32,
}

impl<D: DiceSource> GameSession<D> {
    /// Start a game. The board is drawn first, then the mission.
    pub fn new(config: GameConfig, mut dice: D) -> Self {
        let store = TerritoryStore::new(&mut dice);
        let mission = config
            .mission
            .unwrap_or_else(|| select_random_mission(&mut dice));
        log::info!("New game for {} with mission {}", config.player, mission.label());

        Self {
            store,
            mission,
            player: config.player,
            dice,
            rounds: 0,
        }
    }

    /// Resume from an existing board.
    pub fn with_store(store: TerritoryStore, mission: Mission, player: Faction, dice: D) -> Self {
        Self {
            store,
            mission,
            player,
            dice,
            rounds: 0,
        }
    }

    /// Validate and resolve one attack ordered by the player.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError`] if the order is illegal; the board is unchanged.
    pub fn attack(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> Result<BattleReport, AttackError> {
        validate_attack(&self.store, attacker, defender, &self.player)?;
        let report = resolve_battle(&mut self.store, attacker, defender, &mut self.dice)?;
        self.rounds += 1;
        Ok(report)
    }

    /// Check whether the mission is satisfied.
    #[must_use]
    pub fn check_mission(&self) -> bool {
        self.progress().complete
    }

    /// Progress towards the mission.
    #[must_use]
    pub fn progress(&self) -> MissionProgress {
        mission_progress(&self.store, &self.mission, &self.player)
    }

    /// The board.
    #[must_use]
    pub const fn store(&self) -> &TerritoryStore {
        &self.store
    }

    /// The secret mission.
    #[must_use]
    pub const fn mission(&self) -> &Mission {
        &self.mission
    }

    /// The player's faction.
    #[must_use]
    pub const fn player(&self) -> &Faction {
        &self.player
    }

    /// Attacks resolved so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}

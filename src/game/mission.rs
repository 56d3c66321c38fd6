//! Secret missions and their win conditions.

use std::fmt;

use serde::Serialize;

use crate::game::{DiceSource, Faction, TerritoryStore};

/// Faction the destroy mission targets.
pub const DESTROY_TARGET: &str = "Verde";

/// Territories the conquer mission requires.
pub const CONQUER_THRESHOLD: usize = 3;

/// Number of missions to draw from.
pub const MISSION_COUNT: u32 = 2;

/// The player's secret win condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mission {
    /// No territory may remain under `target`.
    DestroyFaction {
        /// Faction to wipe off the board.
        target: Faction,
    },
    /// Hold at least `threshold` territories.
    ConquerCount {
        /// Territories required.
        threshold: usize,
    },
}

impl Mission {
    /// The destroy mission against [`DESTROY_TARGET`].
    #[must_use]
    pub fn destroy_faction() -> Self {
        Self::DestroyFaction {
            target: Faction::from(DESTROY_TARGET),
        }
    }

    /// The conquer mission with [`CONQUER_THRESHOLD`].
    #[must_use]
    pub const fn conquer_count() -> Self {
        Self::ConquerCount {
            threshold: CONQUER_THRESHOLD,
        }
    }

    /// Look up a mission by its numeric id (1 = destroy, 2 = conquer).
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::destroy_faction()),
            2 => Some(Self::conquer_count()),
            _ => None,
        }
    }

    /// Numeric id of this mission.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::DestroyFaction { .. } => 1,
            Self::ConquerCount { .. } => 2,
        }
    }

    /// Short label for tables and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DestroyFaction { .. } => "destroy",
            Self::ConquerCount { .. } => "conquer",
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestroyFaction { target } => {
                write!(f, "MISSION 1: Completely destroy the {target} army.")
            }
            Self::ConquerCount { threshold } => {
                write!(f, "MISSION 2: Conquer a total of {threshold} territories.")
            }
        }
    }
}

/// Draw one of the missions uniformly.
pub fn select_random_mission(dice: &mut impl DiceSource) -> Mission {
    let id = dice.next_in_range(1, MISSION_COUNT);
    Mission::from_id(id).unwrap_or_else(Mission::destroy_faction)
}

/// Counts behind a mission verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissionProgress {
    /// Territories held by the player.
    pub owned: usize,
    /// Territories the conquer mission requires.
    pub threshold: usize,
    /// Territories still held by the destroy mission's target.
    pub target_remaining: usize,
    /// Whether the mission is satisfied.
    pub complete: bool,
}

/// Scan the board once and report progress towards `mission`.
#[must_use]
pub fn mission_progress(
    store: &TerritoryStore,
    mission: &Mission,
    player: &Faction,
) -> MissionProgress {
    let target = match mission {
        Mission::DestroyFaction { target } => Some(target),
        Mission::ConquerCount { .. } => None,
    };
    let threshold = match mission {
        Mission::ConquerCount { threshold } => *threshold,
        Mission::DestroyFaction { .. } => CONQUER_THRESHOLD,
    };

    let mut owned = 0;
    let mut target_remaining = 0;
    for (_, territory) in store.iter() {
        if territory.is_owned_by(player) {
            owned += 1;
        }
        if target.is_some_and(|t| territory.is_owned_by(t)) {
            target_remaining += 1;
        }
    }

    // Any faction may have removed the target; only its absence counts
    let complete = match mission {
        Mission::DestroyFaction { .. } => target_remaining == 0,
        Mission::ConquerCount { .. } => owned >= threshold,
    };

    MissionProgress {
        owned,
        threshold,
        target_remaining,
        complete,
    }
}

/// Check whether `mission` is satisfied for `player`.
#[must_use]
pub fn evaluate_mission(store: &TerritoryStore, mission: &Mission, player: &Faction) -> bool {
    mission_progress(store, mission, player).complete
}

/// Check a mission given by numeric id. Unknown ids are never satisfied.
#[must_use]
pub fn evaluate_mission_id(store: &TerritoryStore, mission_id: u32, player: &Faction) -> bool {
    Mission::from_id(mission_id).is_some_and(|m| evaluate_mission(store, &m, player))
}

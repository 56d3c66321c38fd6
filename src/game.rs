//! Game layer for Conquista.
//!
//! Implements the rules of the board:
//! - Five territories with owners and garrisons
//! - Dice-based combat and conquest
//! - Secret missions and their win conditions
//! - Order validation and the session the shell drives

mod combat;
mod dice;
mod invariants;
mod mission;
mod rules;
mod state;
mod store;
mod territory;

pub use combat::{
    BattleReport, CONQUEST_COST, Loser, MAX_ATTACK_DICE, MAX_DEFENSE_DICE, RoundOutcome,
    attack_dice_count, defense_dice_count, resolve_battle, resolve_round,
};
pub use dice::{DIE_SIDES, Dice, DiceSource, LoadedDice, time_seed};
pub use invariants::{InvariantViolation, check_invariants};
pub use mission::{
    CONQUER_THRESHOLD, DESTROY_TARGET, MISSION_COUNT, Mission, MissionProgress, evaluate_mission,
    evaluate_mission_id, mission_progress, select_random_mission,
};
pub use rules::{legal_attacks, validate_attack};
pub use state::{DEFAULT_PLAYER_COLOR, GameConfig, GameSession};
pub use store::{MAX_STARTING_TROOPS, MIN_STARTING_TROOPS, STARTING_LAYOUT, TerritoryStore};
pub use territory::{Faction, TERRITORY_COUNT, Territory, TerritoryId};

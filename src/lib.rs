// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Conquista: a single-player, dice-driven territorial conquest game.
//!
//! The player's faction attacks a fixed board of five territories. Each round
//! compares the highest attacking die against the highest defending die, and
//! a secret mission decides victory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI shell (play / simulate)     │
//! ├─────────────────────────────────────┤
//! │   Session · Autoplay · Validation   │
//! ├─────────────────────────────────────┤
//! │  Territory store · Combat · Mission │
//! ├─────────────────────────────────────┤
//! │        Dice (seeded / scripted)     │
//! └─────────────────────────────────────┘
//! ```

pub mod autoplay;
pub mod error;
pub mod game;

pub use error::{AttackError, BattleError, BattleResult};

// Re-export key game types at crate root for convenience
pub use game::{
    BattleReport, Dice, DiceSource, Faction, GameConfig, GameSession, Mission, Territory,
    TerritoryId, TerritoryStore, evaluate_mission, resolve_battle, select_random_mission,
};

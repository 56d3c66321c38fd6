//! Combat resolution.
//!
//! One round compares the single highest attacking die against the single
//! highest defending die. Ties go to the defender. The loser of the
//! comparison loses one troop; a defender left with no troops is conquered.

use serde::Serialize;

use crate::error::{BattleError, BattleResult};
use crate::game::{DiceSource, Faction, Territory, TerritoryId, TerritoryStore};

/// Most dice the attacker may roll.
pub const MAX_ATTACK_DICE: u32 = 3;

/// Most dice the defender may roll.
pub const MAX_DEFENSE_DICE: u32 = 2;

/// Troops the attacker moves into a territory it conquers.
pub const CONQUEST_COST: u32 = 1;

/// Side that lost the die comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Loser {
    /// Attacker lost a troop (tie or higher defense).
    Attacker,
    /// Defender lost a troop.
    Defender,
}

/// Full record of a resolved round, enough to render a battle report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    /// Attacking territory id.
    pub attacker_id: TerritoryId,
    /// Defending territory id.
    pub defender_id: TerritoryId,
    /// Attacking dice in roll order.
    pub attack_rolls: Vec<u8>,
    /// Defending dice in roll order.
    pub defense_rolls: Vec<u8>,
    /// Highest attacking die.
    pub max_attack: u8,
    /// Highest defending die.
    pub max_defense: u8,
    /// Which side lost the comparison.
    pub loser: Loser,
    /// Whether the defender was conquered.
    pub conquered: bool,
    /// Faction that owned the defender before the round.
    pub defender_previous_owner: Faction,
    /// Attacker after the round.
    pub attacker: Territory,
    /// Defender after the round.
    pub defender: Territory,
}

/// Dice the attacker rolls: one fewer than its troops, capped at three.
#[must_use]
pub fn attack_dice_count(troops: u32) -> u32 {
    troops.saturating_sub(1).min(MAX_ATTACK_DICE)
}

/// Dice the defender rolls: one per troop, capped at two.
#[must_use]
pub fn defense_dice_count(troops: u32) -> u32 {
    troops.min(MAX_DEFENSE_DICE)
}

/// Outcome of [`resolve_round`] before it is tied to store ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Attacking dice in roll order.
    pub attack_rolls: Vec<u8>,
    /// Defending dice in roll order.
    pub defense_rolls: Vec<u8>,
    /// Highest attacking die (0 if none were rolled).
    pub max_attack: u8,
    /// Highest defending die (0 if none were rolled).
    pub max_defense: u8,
    /// Which side lost the comparison.
    pub loser: Loser,
    /// Whether the defender was conquered.
    pub conquered: bool,
}

/// Resolve one round of combat between two records, mutating both.
///
/// The attacker must hold at least 2 troops and the records must be
/// distinct; [`resolve_battle`] checks this for store-addressed battles.
/// Attacker dice are rolled before defender dice.
pub fn resolve_round(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut impl DiceSource,
) -> RoundOutcome {
    debug_assert!(attacker.can_attack(), "attacker needs at least 2 troops");

    let attack_rolls = dice.roll_dice(attack_dice_count(attacker.troops) as usize);
    let defense_rolls = dice.roll_dice(defense_dice_count(defender.troops) as usize);

    let max_attack = attack_rolls.iter().copied().max().unwrap_or(0);
    let max_defense = defense_rolls.iter().copied().max().unwrap_or(0);

    let loser = if max_attack > max_defense {
        defender.troops = defender.troops.saturating_sub(1);
        Loser::Defender
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        Loser::Attacker
    };

    let conquered = defender.troops == 0;
    if conquered {
        defender.owner = attacker.owner.clone();
        defender.troops = 1;
        // Winning rounds cost no casualty, so the attacker keeps at least 1
        attacker.troops = attacker.troops.saturating_sub(CONQUEST_COST);
    }

    RoundOutcome {
        attack_rolls,
        defense_rolls,
        max_attack,
        max_defense,
        loser,
        conquered,
    }
}

/// Resolve one round of combat between two territories of the store.
///
/// # Errors
///
/// Returns [`BattleError`] if either id is out of range, the ids are equal,
/// or the attacker holds fewer than 2 troops. The store is unchanged on error.
pub fn resolve_battle(
    store: &mut TerritoryStore,
    attacker_id: TerritoryId,
    defender_id: TerritoryId,
    dice: &mut impl DiceSource,
) -> BattleResult<BattleReport> {
    if attacker_id.index().is_none() {
        return Err(BattleError::UnknownTerritory(attacker_id));
    }
    if defender_id.index().is_none() {
        return Err(BattleError::UnknownTerritory(defender_id));
    }
    let (attacker, defender) = store
        .pair_mut(attacker_id, defender_id)
        .ok_or(BattleError::SameTerritory(attacker_id))?;

    if !attacker.can_attack() {
        return Err(BattleError::NotEnoughTroops {
            attacker: attacker_id,
            troops: attacker.troops,
        });
    }

    let defender_previous_owner = defender.owner.clone();
    let outcome = resolve_round(attacker, defender, dice);

    log::debug!(
        "{} ({}) attacks {} ({}): {:?} vs {:?}, {:?} loses",
        attacker.name,
        attacker.owner,
        defender.name,
        defender_previous_owner,
        outcome.attack_rolls,
        outcome.defense_rolls,
        outcome.loser
    );
    if outcome.conquered {
        log::info!("{} conquered {}", attacker.owner, defender.name);
    }

    Ok(BattleReport {
        attacker_id,
        defender_id,
        max_attack: outcome.max_attack,
        max_defense: outcome.max_defense,
        attack_rolls: outcome.attack_rolls,
        defense_rolls: outcome.defense_rolls,
        loser: outcome.loser,
        conquered: outcome.conquered,
        defender_previous_owner,
        attacker: attacker.clone(),
        defender: defender.clone(),
    })
}

//! Order validation for the player's attacks.

use crate::error::AttackError;
use crate::game::{Faction, TerritoryId, TerritoryStore};

/// Check that `player` may order `attacker` to attack `defender`.
///
/// Checks run in order: id range, distinct ids, attacker ownership, attacker
/// troops, defender ownership.
///
/// # Errors
///
/// Returns the first [`AttackError`] that applies.
pub fn validate_attack(
    store: &TerritoryStore,
    attacker: TerritoryId,
    defender: TerritoryId,
    player: &Faction,
) -> Result<(), AttackError> {
    let attacking = store
        .get(attacker)
        .ok_or(AttackError::InvalidTerritory(attacker))?;
    let defending = store
        .get(defender)
        .ok_or(AttackError::InvalidTerritory(defender))?;

    if attacker == defender {
        return Err(AttackError::SameTerritory(attacker));
    }
    if !attacking.is_owned_by(player) {
        return Err(AttackError::NotYourTerritory {
            attacker,
            player: player.to_string(),
        });
    }
    if !attacking.can_attack() {
        return Err(AttackError::NotEnoughTroops {
            attacker,
            troops: attacking.troops,
        });
    }
    if defending.is_owned_by(player) {
        return Err(AttackError::OwnTerritory(defender));
    }

    Ok(())
}

/// Every `(attacker, defender)` order `player` may currently give.
#[must_use]
pub fn legal_attacks(store: &TerritoryStore, player: &Faction) -> Vec<(TerritoryId, TerritoryId)> {
    TerritoryId::all()
        .flat_map(|a| TerritoryId::all().map(move |d| (a, d)))
        .filter(|&(a, d)| validate_attack(store, a, d, player).is_ok())
        .collect()
}

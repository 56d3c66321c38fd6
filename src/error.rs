//! Error types for battle orders.

use std::fmt;

use crate::game::TerritoryId;

/// Engine precondition violations detected by [`resolve_battle`].
///
/// The shell validates orders before calling the engine, so reaching one of
/// these means the caller skipped validation.
///
/// [`resolve_battle`]: crate::game::resolve_battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleError {
    /// A territory id outside `1..=TERRITORY_COUNT`.
    UnknownTerritory(TerritoryId),
    /// Attacker and defender are the same record.
    SameTerritory(TerritoryId),
    /// The attacker cannot keep one troop in reserve.
    NotEnoughTroops {
        /// The attacking territory.
        attacker: TerritoryId,
        /// Its current troop count.
        troops: u32,
    },
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::UnknownTerritory(id) => write!(f, "unknown territory id {id}"),
            BattleError::SameTerritory(id) => {
                write!(f, "territory {id} cannot attack itself")
            }
            BattleError::NotEnoughTroops { attacker, troops } => write!(
                f,
                "territory {attacker} has {troops} troop(s), at least 2 are needed to attack"
            ),
        }
    }
}

impl std::error::Error for BattleError {}

/// Reasons the shell refuses an attack order.
///
/// Returned by [`validate_attack`]; a refused order leaves the store untouched.
///
/// [`validate_attack`]: crate::game::validate_attack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// An id outside the valid range.
    InvalidTerritory(TerritoryId),
    /// Attacker and defender ids are equal.
    SameTerritory(TerritoryId),
    /// The attacking territory belongs to another faction.
    NotYourTerritory {
        /// The attacking territory.
        attacker: TerritoryId,
        /// The player's own color.
        player: String,
    },
    /// The attacker has fewer than 2 troops.
    NotEnoughTroops {
        /// The attacking territory.
        attacker: TerritoryId,
        /// Its current troop count.
        troops: u32,
    },
    /// The defender already belongs to the player.
    OwnTerritory(TerritoryId),
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::InvalidTerritory(id) => write!(f, "invalid territory id {id}"),
            AttackError::SameTerritory(id) => {
                write!(f, "attacker and defender are both territory {id}")
            }
            AttackError::NotYourTerritory { attacker, player } => write!(
                f,
                "territory {attacker} is not yours, you can only attack from {player} territories"
            ),
            AttackError::NotEnoughTroops { attacker, troops } => write!(
                f,
                "territory {attacker} has {troops} troop(s), it needs at least 2 (1 to attack, 1 in reserve)"
            ),
            AttackError::OwnTerritory(id) => {
                write!(f, "territory {id} is already yours, you cannot attack it")
            }
        }
    }
}

impl std::error::Error for AttackError {}

impl From<BattleError> for AttackError {
    fn from(e: BattleError) -> Self {
        match e {
            BattleError::UnknownTerritory(id) => AttackError::InvalidTerritory(id),
            BattleError::SameTerritory(id) => AttackError::SameTerritory(id),
            BattleError::NotEnoughTroops { attacker, troops } => {
                AttackError::NotEnoughTroops { attacker, troops }
            }
        }
    }
}

/// Result type for engine calls.
pub type BattleResult<T> = Result<T, BattleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_error_display() {
        let err = BattleError::NotEnoughTroops {
            attacker: TerritoryId::new(2),
            troops: 1,
        };
        let text = err.to_string();
        assert!(text.contains("territory 2"));
        assert!(text.contains("1 troop"));
    }

    #[test]
    fn test_attack_error_from_battle_error() {
        let err = AttackError::from(BattleError::SameTerritory(TerritoryId::new(4)));
        assert_eq!(err, AttackError::SameTerritory(TerritoryId::new(4)));
    }
}

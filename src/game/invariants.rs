//! Board invariants - sanity checks that detect bugs.
//!
//! Troops are never created during play, so no territory can ever hold more
//! than the largest starting garrison. A territory emptied in battle changes
//! hands with one troop, so none is ever left at zero. These should NEVER
//! trigger.

use std::collections::HashSet;

use crate::game::{MAX_STARTING_TROOPS, TerritoryStore};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(store: &TerritoryStore) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut names = HashSet::new();

    for (id, territory) in store.iter() {
        if !names.insert(territory.name.as_str()) {
            violations.push(InvariantViolation {
                message: format!("Territory {id} repeats the name {:?}", territory.name),
            });
        }

        if territory.owner.as_str().is_empty() {
            violations.push(InvariantViolation {
                message: format!("Territory {id} ({}) has no owner", territory.name),
            });
        }

        if territory.troops == 0 {
            violations.push(InvariantViolation {
                message: format!("Territory {id} ({}) has no troops", territory.name),
            });
        }

        if territory.troops > MAX_STARTING_TROOPS {
            violations.push(InvariantViolation {
                message: format!(
                    "Territory {id} ({}) has {} troops > starting max {}",
                    territory.name, territory.troops, MAX_STARTING_TROOPS
                ),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dice, Territory};

    #[test]
    fn test_fresh_board_is_valid() {
        for seed in 0..50 {
            let store = TerritoryStore::new(&mut Dice::from_seed(seed));
            assert!(check_invariants(&store).is_empty());
        }
    }

    #[test]
    fn test_detects_duplicate_names_and_overflow() {
        let store = TerritoryStore::from_territories([
            Territory::new("Alaska", "Azul", 2),
            Territory::new("Alaska", "Verde", 2),
            Territory::new("Brasil", "", 2),
            Territory::new("Siberia", "Amarelo", 9),
            Territory::new("Africa do Sul", "Azul", 3),
        ]);
        let violations = check_invariants(&store);
        assert_eq!(violations.len(), 3, "{violations:?}");
        assert!(violations[0].to_string().contains("Alaska"));
    }

    #[test]
    fn test_detects_empty_territory() {
        let store = TerritoryStore::from_territories([
            Territory::new("Alaska", "Azul", 0),
            Territory::new("Groelandia", "Verde", 1),
            Territory::new("Brasil", "Verde", 2),
            Territory::new("Africa do Sul", "Amarelo", 3),
            Territory::new("Siberia", "Vermelho", 4),
        ]);
        let violations = check_invariants(&store);
        assert_eq!(violations.len(), 1, "{violations:?}");
        assert!(violations[0].to_string().contains("Alaska"));
        assert!(violations[0].to_string().contains("no troops"));
    }
}

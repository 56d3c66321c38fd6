//! The fixed board of territories.

use serde::{Deserialize, Serialize};

use crate::game::{DiceSource, Faction, TERRITORY_COUNT, Territory, TerritoryId};

/// Starting layout: name and owner of each territory, in board order.
pub const STARTING_LAYOUT: [(&str, &str); TERRITORY_COUNT] = [
    ("Alaska", "Vermelho"),
    ("Groelandia", "Azul"),
    ("Brasil", "Verde"),
    ("Africa do Sul", "Amarelo"),
    ("Siberia", "Vermelho"),
];

/// Fewest troops a territory starts with.
pub const MIN_STARTING_TROOPS: u32 = 2;

/// Most troops a territory starts with.
pub const MAX_STARTING_TROOPS: u32 = 4;

/// Ordered board of exactly [`TERRITORY_COUNT`] territories.
///
/// Territories are addressed by [`TerritoryId`]; the board is never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryStore {
    territories: [Territory; TERRITORY_COUNT],
}

impl TerritoryStore {
    /// Build the starting board, drawing each garrison uniformly from
    /// `MIN_STARTING_TROOPS..=MAX_STARTING_TROOPS`.
    #[must_use]
    pub fn new(dice: &mut impl DiceSource) -> Self {
        let territories = STARTING_LAYOUT.map(|(name, owner)| {
            let troops = dice.next_in_range(MIN_STARTING_TROOPS, MAX_STARTING_TROOPS);
            Territory::new(name, owner, troops)
        });
        log::debug!("Initialized board: {territories:?}");
        Self { territories }
    }

    /// Build a board from explicit records.
    #[must_use]
    pub const fn from_territories(territories: [Territory; TERRITORY_COUNT]) -> Self {
        Self { territories }
    }

    /// Get a territory by id.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        id.index().map(|i| &self.territories[i])
    }

    /// Get a mutable territory by id.
    #[must_use]
    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        id.index().map(|i| &mut self.territories[i])
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// Returns `None` if either id is out of range or both ids are equal.
    #[must_use]
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let a = first.index()?;
        let b = second.index()?;
        if a == b {
            return None;
        }

        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Iterate over `(id, territory)` in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId::from_index(i), t))
    }

    /// All territories in board order.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Count the territories held by `faction`.
    #[must_use]
    pub fn count_owned(&self, faction: &Faction) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .count()
    }

    /// Total troops across the board.
    #[must_use]
    pub fn total_troops(&self) -> u32 {
        self.territories.iter().map(|t| t.troops).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dice, LoadedDice};

    #[test]
    fn test_new_uses_fixed_layout() {
        let mut dice = Dice::from_seed(1);
        let store = TerritoryStore::new(&mut dice);

        let names: Vec<&str> = store.territories().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Alaska", "Groelandia", "Brasil", "Africa do Sul", "Siberia"]
        );

        let owners: Vec<&str> = store.territories().iter().map(|t| t.owner.as_str()).collect();
        assert_eq!(owners, vec!["Vermelho", "Azul", "Verde", "Amarelo", "Vermelho"]);
    }

    #[test]
    fn test_new_troops_in_range() {
        for seed in 0..200 {
            let store = TerritoryStore::new(&mut Dice::from_seed(seed));
            for t in store.territories() {
                assert!((2..=4).contains(&t.troops), "seed {seed}: {t:?}");
            }
        }
    }

    #[test]
    fn test_new_draws_troops_in_order() {
        let store = TerritoryStore::new(&mut LoadedDice::new([2, 3, 4, 3, 2]));
        let troops: Vec<u32> = store.territories().iter().map(|t| t.troops).collect();
        assert_eq!(troops, vec![2, 3, 4, 3, 2]);
    }

    #[test]
    fn test_get_by_id() {
        let store = TerritoryStore::new(&mut LoadedDice::default());
        assert_eq!(store.get(TerritoryId::new(3)).unwrap().name, "Brasil");
        assert!(store.get(TerritoryId::new(0)).is_none());
        assert!(store.get(TerritoryId::new(6)).is_none());
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut store = TerritoryStore::new(&mut LoadedDice::default());

        let (a, d) = store.pair_mut(TerritoryId::new(2), TerritoryId::new(4)).unwrap();
        assert_eq!(a.name, "Groelandia");
        assert_eq!(d.name, "Africa do Sul");

        let (a, d) = store.pair_mut(TerritoryId::new(5), TerritoryId::new(1)).unwrap();
        assert_eq!(a.name, "Siberia");
        assert_eq!(d.name, "Alaska");
    }

    #[test]
    fn test_pair_mut_rejects_same_or_invalid() {
        let mut store = TerritoryStore::new(&mut LoadedDice::default());
        assert!(store.pair_mut(TerritoryId::new(2), TerritoryId::new(2)).is_none());
        assert!(store.pair_mut(TerritoryId::new(0), TerritoryId::new(2)).is_none());
        assert!(store.pair_mut(TerritoryId::new(2), TerritoryId::new(9)).is_none());
    }

    #[test]
    fn test_count_owned() {
        let store = TerritoryStore::new(&mut LoadedDice::default());
        assert_eq!(store.count_owned(&Faction::from("Vermelho")), 2);
        assert_eq!(store.count_owned(&Faction::from("Azul")), 1);
        assert_eq!(store.count_owned(&Faction::from("Roxo")), 0);
    }
}

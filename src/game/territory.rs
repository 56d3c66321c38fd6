//! Territory records and faction colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of territories on the board.
pub const TERRITORY_COUNT: usize = 5;

/// One-based territory identifier as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(usize);

impl TerritoryId {
    /// Create an id from its one-based value. Range is checked on use.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Id of the territory stored at a zero-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The raw one-based value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Zero-based storage index, or `None` if the id is out of range.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.0 >= 1 && self.0 <= TERRITORY_COUNT {
            Some(self.0 - 1)
        } else {
            None
        }
    }

    /// Iterate over every valid id in board order.
    pub fn all() -> impl Iterator<Item = TerritoryId> {
        (0..TERRITORY_COUNT).map(Self::from_index)
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A faction color label such as `"Azul"`.
///
/// The set of colors is open; any string names a faction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(String);

impl Faction {
    /// Create a faction from its color label.
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    /// The color label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Faction {
    fn from(color: &str) -> Self {
        Self::new(color)
    }
}

impl PartialEq<str> for Faction {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Faction {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named region with an owner and a garrison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, unique on the board.
    pub name: String,
    /// Faction currently holding the territory.
    pub owner: Faction,
    /// Troops stationed here.
    pub troops: u32,
}

impl Territory {
    /// Create a territory.
    #[must_use]
    pub fn new(name: impl Into<String>, owner: impl Into<Faction>, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops,
        }
    }

    /// Check if `faction` holds this territory.
    #[must_use]
    pub fn is_owned_by(&self, faction: &Faction) -> bool {
        self.owner == *faction
    }

    /// A territory needs one troop to roll and one to stay behind.
    #[must_use]
    pub const fn can_attack(&self) -> bool {
        self.troops >= 2
    }
}

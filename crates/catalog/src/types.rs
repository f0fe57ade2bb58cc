//! Core domain types for the player catalog.
//!
//! A catalog is one population's player table plus the name index that maps
//! unique display keys onto table rows. Row order is the index space of every
//! similarity vector produced for that population, so it never changes after
//! load.

use crate::error::{DataLoadError, Result, UnknownPlayerError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a player in the catalog table (0-based)
pub type RowIndex = usize;

/// Player age in whole years (15-42 in the 2021-2022 data)
pub type Age = u8;

// =============================================================================
// Enums
// =============================================================================

/// The two disjoint player groups. Each one has its own catalog, name index
/// and similarity engine, and they are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Population {
    Outfield,
    Goalkeeper,
}

impl Population {
    pub const ALL: [Population; 2] = [Population::Outfield, Population::Goalkeeper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Population::Outfield => "outfield",
            Population::Goalkeeper => "goalkeeper",
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred foot as recorded in the outfield table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredFoot {
    Left,
    Right,
}

impl PreferredFoot {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredFoot::Left => "left",
            PreferredFoot::Right => "right",
        }
    }
}

impl fmt::Display for PreferredFoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Player
// =============================================================================

/// One catalog row.
///
/// Only the display attributes are kept; the statistical feature columns of
/// the source table are consumed offline by the similarity model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique display key from the name index, e.g. "Danilo (Juventus)"
    pub key: String,
    /// Name as printed in the table; may collide across rows
    pub name: String,
    pub club: String,
    /// Short position code, e.g. "FW", "GK" or "DF,MF"
    pub position: String,
    pub league: String,
    pub age: Age,
    /// `None` for goalkeepers and for outfield rows without a recorded foot
    pub foot: Option<PreferredFoot>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable in-memory player table with its name index.
///
/// Built once at startup and then only read, so it is shared behind an `Arc`
/// without any locking.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) population: Population,
    pub(crate) players: Vec<Player>,
    pub(crate) name_index: HashMap<String, RowIndex>,
    pub(crate) age_bounds: Option<(Age, Age)>,
}

impl Catalog {
    /// Creates a new, empty catalog for a population
    pub fn new(population: Population) -> Self {
        Self {
            population,
            players: Vec::new(),
            name_index: HashMap::new(),
            age_bounds: None,
        }
    }

    /// Builds a catalog from rows that already carry their unique keys.
    ///
    /// Row order is taken from the vector order.
    pub fn from_players(population: Population, players: Vec<Player>) -> Result<Self> {
        let mut catalog = Self::new(population);
        for player in players {
            catalog.insert_player(player)?;
        }
        Ok(catalog)
    }

    pub fn population(&self) -> Population {
        self.population
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by row
    pub fn get_player(&self, row: RowIndex) -> Option<&Player> {
        self.players.get(row)
    }

    /// Resolve a display key to its row
    pub fn lookup(&self, key: &str) -> std::result::Result<RowIndex, UnknownPlayerError> {
        self.name_index
            .get(key)
            .copied()
            .ok_or_else(|| UnknownPlayerError::new(key))
    }

    /// Get a player by display key
    pub fn get_by_key(&self, key: &str) -> Option<&Player> {
        self.name_index.get(key).and_then(|&row| self.players.get(row))
    }

    /// All display keys, sorted. This is what the player selector offers.
    pub fn player_keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.name_index.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Distinct league names, sorted
    pub fn leagues(&self) -> Vec<&str> {
        self.players
            .iter()
            .map(|p| p.league.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Youngest and oldest age in the catalog, `None` when empty
    pub fn age_bounds(&self) -> Option<(Age, Age)> {
        self.age_bounds
    }

    /// First sorted key starting with `prefix`, or the first sorted key when
    /// nothing matches.
    pub fn default_player(&self, prefix: &str) -> Option<&str> {
        let keys = self.player_keys_sorted();
        keys.iter()
            .copied()
            .find(|key| key.starts_with(prefix))
            .or_else(|| keys.first().copied())
    }

    /// Case-insensitive substring search over display keys, sorted by key
    pub fn search(&self, fragment: &str) -> Vec<&Player> {
        let needle = fragment.to_lowercase();
        let mut matches: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| p.key.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.key.cmp(&b.key));
        matches
    }

    /// Append a row. Keys must be unique.
    pub fn insert_player(&mut self, player: Player) -> Result<RowIndex> {
        let row = self.players.len();
        if self.name_index.contains_key(&player.key) {
            return Err(DataLoadError::DuplicateKey { key: player.key });
        }

        self.age_bounds = Some(match self.age_bounds {
            Some((min, max)) => (min.min(player.age), max.max(player.age)),
            None => (player.age, player.age),
        });
        self.name_index.insert(player.key.clone(), row);
        self.players.push(player);
        Ok(row)
    }
}

//! Catalog building and validation.
//!
//! Pairs the player table with its name index:
//! - both artifacts must describe the same number of rows
//! - every row must be claimed by exactly one key
//! - every key must point at an existing row

use crate::error::{DataLoadError, Result};
use crate::layout::DataLayout;
use crate::parser::{self, PlayerRow};
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

impl Catalog {
    /// Load one population's catalog from a data directory
    ///
    /// Steps:
    /// 1. Parse the table and the name index (in parallel)
    /// 2. Check the row counts agree
    /// 3. Assign every row its unique display key
    /// 4. Validate
    pub fn load_from_files(data_dir: &Path, population: Population) -> Result<Self> {
        let layout = DataLayout::for_population(population);
        let table_path = layout.table_path(data_dir);
        let index_path = layout.name_index_path(data_dir);

        info!(
            "Loading {} catalog from {}",
            population,
            data_dir.display()
        );

        let (rows, name_index) = rayon::join(
            || parser::parse_players(&table_path),
            || parser::parse_name_index(&index_path),
        );
        let rows = rows?;
        let name_index = name_index?;

        let catalog = Self::assemble(population, rows, name_index)?;
        catalog.validate()?;

        let (min_age, max_age) = catalog.age_bounds().unwrap_or_default();
        info!(
            "Loaded {} {} players across {} leagues (ages {}-{})",
            catalog.len(),
            population,
            catalog.leagues().len(),
            min_age,
            max_age
        );
        Ok(catalog)
    }

    /// Join parsed table rows with the name index.
    ///
    /// The name index must be a bijection onto the table rows.
    pub fn assemble(
        population: Population,
        rows: Vec<PlayerRow>,
        name_index: HashMap<String, RowIndex>,
    ) -> Result<Self> {
        if name_index.len() != rows.len() {
            return Err(DataLoadError::RowCountMismatch {
                artifact: DataLayout::for_population(population).name_index.to_string(),
                expected: rows.len(),
                found: name_index.len(),
            });
        }

        let mut keys: Vec<Option<String>> = vec![None; rows.len()];
        for (key, row) in name_index {
            let Some(slot) = keys.get_mut(row) else {
                return Err(DataLoadError::ValidationError(format!(
                    "name index entry '{}' points at row {} but the table has {} rows",
                    key,
                    row,
                    rows.len()
                )));
            };
            if let Some(first) = slot.take() {
                // Report the pair in a stable order
                let (first, second) = if first <= key { (first, key) } else { (key, first) };
                return Err(DataLoadError::DuplicateRow { row, first, second });
            }
            *slot = Some(key);
        }

        let mut catalog = Catalog::new(population);
        for (row, (player, key)) in rows.into_iter().zip(keys).enumerate() {
            // Counts match and no row was claimed twice, so every row has a key
            let key = key.ok_or_else(|| {
                DataLoadError::ValidationError(format!("row {} has no name index entry", row))
            })?;
            catalog.insert_player(Player {
                key,
                name: player.name,
                club: player.club,
                position: player.position,
                league: player.league,
                age: player.age,
                foot: player.foot,
            })?;
        }
        debug!("Assembled {} rows for {}", catalog.len(), population);
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// Check that:
    /// - the catalog is not empty
    /// - every row has a position and a league
    /// - goalkeepers are not mixed into the outfield table and vice versa
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(DataLoadError::ValidationError(format!(
                "{} catalog is empty",
                self.population
            )));
        }

        for player in &self.players {
            if player.position.is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "position".to_string(),
                    value: format!("<empty> for {}", player.key),
                });
            }
            if player.league.is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "league".to_string(),
                    value: format!("<empty> for {}", player.key),
                });
            }

            let is_keeper = player.position == "GK";
            match self.population {
                Population::Goalkeeper if !is_keeper => {
                    return Err(DataLoadError::ValidationError(format!(
                        "{} has position {} in the goalkeeper catalog",
                        player.key, player.position
                    )));
                }
                Population::Outfield if is_keeper => {
                    return Err(DataLoadError::ValidationError(format!(
                        "{} is a goalkeeper in the outfield catalog",
                        player.key
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

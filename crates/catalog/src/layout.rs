//! File names of the artifacts that back each population.
//!
//! All artifacts live side by side in one data directory:
//!
//! | population | table            | name index           | engine                    |
//! |------------|------------------|----------------------|---------------------------|
//! | outfield   | `outfield.csv`   | `outfield_id.json`   | `engine_outfield.json`    |
//! | goalkeeper | `goalkeeper.csv` | `goalkeeper_id.json` | `engine_goalkeeper.json`  |

use crate::types::Population;
use std::path::{Path, PathBuf};

/// Artifact file names for one population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLayout {
    pub table: &'static str,
    pub name_index: &'static str,
    pub engine: &'static str,
}

impl DataLayout {
    pub const OUTFIELD: DataLayout = DataLayout {
        table: "outfield.csv",
        name_index: "outfield_id.json",
        engine: "engine_outfield.json",
    };

    pub const GOALKEEPER: DataLayout = DataLayout {
        table: "goalkeeper.csv",
        name_index: "goalkeeper_id.json",
        engine: "engine_goalkeeper.json",
    };

    pub fn for_population(population: Population) -> Self {
        match population {
            Population::Outfield => Self::OUTFIELD,
            Population::Goalkeeper => Self::GOALKEEPER,
        }
    }

    pub fn table_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.table)
    }

    pub fn name_index_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.name_index)
    }

    pub fn engine_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.engine)
    }
}

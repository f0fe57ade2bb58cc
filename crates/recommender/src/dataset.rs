//! Loaded catalogs and engines for both populations.
//!
//! Loading is the only I/O the recommender does. It happens once per
//! process; afterwards everything is read through shared `Arc`s.

use anyhow::{Context, Result};
use catalog::{Catalog, Population};
use once_cell::sync::OnceCell;
use similarity::{PrecomputedEngine, SimilarityEngine};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

static SHARED: OnceCell<Arc<Dataset>> = OnceCell::new();

/// A catalog and the engine aligned with it
#[derive(Debug, Clone)]
pub struct PopulationData {
    pub catalog: Arc<Catalog>,
    pub engine: Arc<PrecomputedEngine>,
}

impl PopulationData {
    /// Pair a catalog with an engine, checking they describe the same rows
    pub fn new(catalog: Catalog, engine: PrecomputedEngine) -> Result<Self> {
        engine.validate_against(&catalog).with_context(|| {
            format!(
                "{} similarity engine does not match its catalog",
                catalog.population()
            )
        })?;

        Ok(Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
        })
    }

    pub fn load(data_dir: &Path, population: Population) -> Result<Self> {
        let catalog = Catalog::load_from_files(data_dir, population)
            .with_context(|| format!("Failed to load {} catalog", population))?;
        let engine = PrecomputedEngine::load_from_dir(data_dir, population)
            .with_context(|| format!("Failed to load {} similarity engine", population))?;
        Self::new(catalog, engine)
    }

    pub fn population(&self) -> Population {
        self.catalog.population()
    }

    /// Similarity vector for `key`, aligned with the catalog rows
    pub fn scores_for(&self, key: &str) -> Option<&[f32]> {
        self.engine.scores_for(key)
    }
}

/// Both populations, loaded and cross-checked
#[derive(Debug, Clone)]
pub struct Dataset {
    outfield: PopulationData,
    goalkeeper: PopulationData,
}

impl Dataset {
    pub fn new(outfield: PopulationData, goalkeeper: PopulationData) -> Result<Self> {
        anyhow::ensure!(
            outfield.population() == Population::Outfield,
            "outfield slot holds the {} population",
            outfield.population()
        );
        anyhow::ensure!(
            goalkeeper.population() == Population::Goalkeeper,
            "goalkeeper slot holds the {} population",
            goalkeeper.population()
        );
        Ok(Self {
            outfield,
            goalkeeper,
        })
    }

    /// Load both populations from `data_dir`, in parallel
    pub fn load(data_dir: &Path) -> Result<Self> {
        let start = Instant::now();

        let (outfield, goalkeeper) = rayon::join(
            || PopulationData::load(data_dir, Population::Outfield),
            || PopulationData::load(data_dir, Population::Goalkeeper),
        );
        let dataset = Self::new(outfield?, goalkeeper?)?;

        info!(
            "Loaded dataset from {} ({} outfield, {} goalkeepers) in {:.2?}",
            data_dir.display(),
            dataset.outfield.catalog.len(),
            dataset.goalkeeper.catalog.len(),
            start.elapsed()
        );
        Ok(dataset)
    }

    /// The process-wide dataset.
    ///
    /// The first successful call loads from `data_dir`; every later call
    /// returns that same dataset and ignores its argument. A failed load
    /// leaves the cache empty, so the next call tries again.
    pub fn shared(data_dir: &Path) -> Result<Arc<Dataset>> {
        SHARED
            .get_or_try_init(|| Self::load(data_dir).map(Arc::new))
            .cloned()
    }

    pub fn population(&self, population: Population) -> &PopulationData {
        match population {
            Population::Outfield => &self.outfield,
            Population::Goalkeeper => &self.goalkeeper,
        }
    }

    pub fn catalog(&self, population: Population) -> &Arc<Catalog> {
        &self.population(population).catalog
    }
}

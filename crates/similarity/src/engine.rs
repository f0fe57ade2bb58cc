//! Similarity engines.
//!
//! The model that produces the scores is trained offline. What reaches this
//! crate is a lookup from player key to a vector of scores against every
//! player of the same population, aligned with that population's catalog
//! rows.

use catalog::parser::open_artifact;
use catalog::{Catalog, DataLayout, DataLoadError, Population};
use rayon::prelude::*;
use std::collections::HashMap;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Maps a player key to its similarity vector.
///
/// Implementations are read-only after construction and shared freely
/// between requests.
pub trait SimilarityEngine: Send + Sync {
    /// Population whose catalog this engine is aligned with
    fn population(&self) -> Population;

    /// Length of every vector this engine returns
    fn row_count(&self) -> usize;

    /// Scores against every catalog row, in row order
    fn scores_for(&self, key: &str) -> Option<&[f32]>;
}

/// Engine backed by a precomputed score lookup
#[derive(Debug, Clone)]
pub struct PrecomputedEngine {
    population: Population,
    row_count: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl PrecomputedEngine {
    /// Build an engine from in-memory vectors. All vectors must have the
    /// same length.
    pub fn from_vectors(
        population: Population,
        vectors: HashMap<String, Vec<f32>>,
    ) -> catalog::Result<Self> {
        let row_count = vectors.values().next().map(Vec::len).unwrap_or(0);

        if let Some((key, vector)) = vectors
            .par_iter()
            .find_any(|(_, vector)| vector.len() != row_count)
        {
            return Err(DataLoadError::RowCountMismatch {
                artifact: format!("score vector for '{}'", key),
                expected: row_count,
                found: vector.len(),
            });
        }

        Ok(Self {
            population,
            row_count,
            vectors,
        })
    }

    /// Load the score lookup for a population from a data directory
    pub fn load_from_dir(data_dir: &Path, population: Population) -> catalog::Result<Self> {
        let path = DataLayout::for_population(population).engine_path(data_dir);
        Self::load_from_file(&path, population)
    }

    /// Load a JSON score lookup: `{ "<key>": [score, ...], ... }`
    pub fn load_from_file(path: &Path, population: Population) -> catalog::Result<Self> {
        info!("Loading {} similarity engine from {}", population, path.display());

        let reader = BufReader::new(open_artifact(path)?);
        let vectors: HashMap<String, Vec<f32>> =
            serde_json::from_reader(reader).map_err(|source| DataLoadError::Json {
                file: path.display().to_string(),
                source,
            })?;

        let engine = Self::from_vectors(population, vectors)?;
        info!(
            "Loaded {} score vectors of length {}",
            engine.vectors.len(),
            engine.row_count
        );
        Ok(engine)
    }

    /// Number of players that have a vector
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Check that this engine can serve every player of `catalog`.
    ///
    /// Check that:
    /// - both belong to the same population
    /// - every vector has one score per catalog row
    /// - every catalog key has a vector, and every vector a catalog key
    pub fn validate_against(&self, catalog: &Catalog) -> catalog::Result<()> {
        if self.population != catalog.population() {
            return Err(DataLoadError::ValidationError(format!(
                "{} engine paired with {} catalog",
                self.population,
                catalog.population()
            )));
        }

        if !self.vectors.is_empty() && self.row_count != catalog.len() {
            return Err(DataLoadError::RowCountMismatch {
                artifact: DataLayout::for_population(self.population).engine.to_string(),
                expected: catalog.len(),
                found: self.row_count,
            });
        }

        if let Some(player) = catalog
            .players()
            .par_iter()
            .find_first(|player| !self.vectors.contains_key(&player.key))
        {
            return Err(DataLoadError::MissingReference {
                entity: "score vector".to_string(),
                key: player.key.clone(),
            });
        }

        if let Some(key) = self
            .vectors
            .par_iter()
            .map(|(key, _)| key)
            .find_any(|key| catalog.get_by_key(key).is_none())
        {
            return Err(DataLoadError::MissingReference {
                entity: "player".to_string(),
                key: key.clone(),
            });
        }

        Ok(())
    }
}

impl SimilarityEngine for PrecomputedEngine {
    fn population(&self) -> Population {
        self.population
    }

    fn row_count(&self) -> usize {
        self.row_count
    }

    fn scores_for(&self, key: &str) -> Option<&[f32]> {
        self.vectors.get(key).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Player;
    use std::io::Write;

    fn vectors(entries: &[(&str, Vec<f32>)]) -> HashMap<String, Vec<f32>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn keeper(key: &str) -> Player {
        Player {
            key: key.to_string(),
            name: key.to_string(),
            club: "Club".to_string(),
            position: "GK".to_string(),
            league: "Bundesliga".to_string(),
            age: 30,
            foot: None,
        }
    }

    fn create_test_catalog() -> Catalog {
        Catalog::from_players(
            Population::Goalkeeper,
            vec![keeper("Manuel Neuer"), keeper("Yann Sommer")],
        )
        .unwrap()
    }

    #[test]
    fn test_scores_for() {
        let engine = PrecomputedEngine::from_vectors(
            Population::Goalkeeper,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8]), ("Yann Sommer", vec![0.8, 1.0])]),
        )
        .unwrap();

        assert_eq!(engine.row_count(), 2);
        assert_eq!(engine.scores_for("Yann Sommer"), Some(&[0.8, 1.0][..]));
        assert!(engine.scores_for("Oliver Kahn").is_none());
    }

    #[test]
    fn test_ragged_vectors_rejected() {
        let result = PrecomputedEngine::from_vectors(
            Population::Goalkeeper,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8]), ("Yann Sommer", vec![0.8])]),
        );
        assert!(matches!(result, Err(DataLoadError::RowCountMismatch { .. })));
    }

    #[test]
    fn test_validate_against_catalog() {
        let catalog = create_test_catalog();

        let engine = PrecomputedEngine::from_vectors(
            Population::Goalkeeper,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8]), ("Yann Sommer", vec![0.8, 1.0])]),
        )
        .unwrap();
        assert!(engine.validate_against(&catalog).is_ok());
    }

    #[test]
    fn test_validate_missing_vector() {
        let catalog = create_test_catalog();

        let engine = PrecomputedEngine::from_vectors(
            Population::Goalkeeper,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8])]),
        )
        .unwrap();
        assert!(matches!(
            engine.validate_against(&catalog),
            Err(DataLoadError::MissingReference { .. })
        ));
    }

    #[test]
    fn test_validate_wrong_length() {
        let catalog = create_test_catalog();

        let engine = PrecomputedEngine::from_vectors(
            Population::Goalkeeper,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8, 0.1]), ("Yann Sommer", vec![0.8, 1.0, 0.2])]),
        )
        .unwrap();
        assert!(matches!(
            engine.validate_against(&catalog),
            Err(DataLoadError::RowCountMismatch { expected: 2, found: 3, .. })
        ));
    }

    #[test]
    fn test_validate_wrong_population() {
        let catalog = create_test_catalog();

        let engine = PrecomputedEngine::from_vectors(
            Population::Outfield,
            vectors(&[("Manuel Neuer", vec![1.0, 0.8]), ("Yann Sommer", vec![0.8, 1.0])]),
        )
        .unwrap();
        assert!(matches!(
            engine.validate_against(&catalog),
            Err(DataLoadError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"Manuel Neuer": [1.0, 0.75], "Yann Sommer": [0.75, 1.0]}"#)
            .unwrap();

        let engine = PrecomputedEngine::load_from_file(file.path(), Population::Goalkeeper).unwrap();
        assert_eq!(engine.len(), 2);
        assert_eq!(engine.scores_for("Manuel Neuer"), Some(&[1.0, 0.75][..]));
    }
}

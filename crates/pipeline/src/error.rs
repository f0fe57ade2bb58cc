//! Error types for the ranking pipeline.

use catalog::{Population, UnknownPlayerError};
use thiserror::Error;

/// Reasons a recommendation request cannot be served.
///
/// Filtering itself never fails; an empty result is a valid answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// The query key is not in the name index
    #[error(transparent)]
    UnknownPlayer(#[from] UnknownPlayerError),

    /// The request names a different population than the catalog holds
    #[error("population mismatch: {requested} requested against the {catalog} catalog")]
    PopulationMismatch {
        catalog: Population,
        requested: Population,
    },

    /// The similarity vector was produced for a different catalog
    #[error("population mismatch: similarity vector has {found} scores for a catalog of {expected} rows")]
    VectorLengthMismatch { expected: usize, found: usize },
}

impl RecommendError {
    /// Both mismatch variants mean an engine was paired with the wrong catalog
    pub fn is_population_mismatch(&self) -> bool {
        matches!(
            self,
            RecommendError::PopulationMismatch { .. } | RecommendError::VectorLengthMismatch { .. }
        )
    }
}

/// A filter option given as text could not be understood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {option} '{value}', expected one of: {expected}")]
pub struct ParseOptionError {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

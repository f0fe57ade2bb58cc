//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to ranked candidates.

use similarity::{Candidate, QueryContext};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a built pipeline be shared between requests
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters only remove candidates, they never reorder them
/// - Filtering cannot fail: an over-constrained pipeline returns nothing
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - The query player the recommendations are for
    fn apply(&self, candidates: Vec<Candidate>, context: &QueryContext) -> Vec<Candidate>;
}

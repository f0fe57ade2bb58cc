//! Filter to remove the query player from their own recommendations.
//!
//! The query player's self-similarity is the maximum score, so they would
//! otherwise always come first. They are removed by row, never by rank:
//! another player tying the top score must survive.

use crate::traits::Filter;
use similarity::{Candidate, QueryContext};

/// Removes the candidate whose row is the query player's row.
pub struct SelfExclusionFilter;

impl Filter for SelfExclusionFilter {
    fn name(&self) -> &str {
        "SelfExclusionFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &QueryContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| candidate.row != context.row)
            .collect()
    }
}

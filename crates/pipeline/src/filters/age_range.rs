//! Filter to keep only players inside an age bracket.

use crate::filter_spec::AgeRange;
use crate::traits::Filter;
use catalog::Catalog;
use similarity::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates with `range.min <= age <= range.max`.
pub struct AgeRangeFilter {
    catalog: Arc<Catalog>,
    range: AgeRange,
}

impl AgeRangeFilter {
    pub fn new(catalog: Arc<Catalog>, range: AgeRange) -> Self {
        Self { catalog, range }
    }
}

impl Filter for AgeRangeFilter {
    fn name(&self) -> &str {
        "AgeRangeFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &QueryContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_player(candidate.row)
                    .is_some_and(|player| self.range.contains(player.age))
            })
            .collect()
    }
}

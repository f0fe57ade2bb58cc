//! Filter on preferred foot.
//!
//! Outfield only: goalkeepers have no recorded foot and pass through.

use crate::filter_spec::FootFilter;
use crate::traits::Filter;
use catalog::Catalog;
use similarity::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates whose foot matches the selected foot.
///
/// ## Algorithm
/// - `All`: keep everything
/// - `Automatic`: keep candidates with the query player's foot. A query
///   player without a recorded foot matches nobody.
/// - `Left` / `Right`: keep exact matches
pub struct PreferredFootFilter {
    catalog: Arc<Catalog>,
    foot: FootFilter,
}

impl PreferredFootFilter {
    pub fn new(catalog: Arc<Catalog>, foot: FootFilter) -> Self {
        Self { catalog, foot }
    }
}

impl Filter for PreferredFootFilter {
    fn name(&self) -> &str {
        "PreferredFootFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &QueryContext) -> Vec<Candidate> {
        if !context.is_outfield() {
            return candidates;
        }
        let Some(required) = self.foot.required_foot(context.foot) else {
            return candidates;
        };
        let Some(required) = required else {
            return Vec::new();
        };

        candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_player(candidate.row)
                    .is_some_and(|player| player.foot == Some(required))
            })
            .collect()
    }
}

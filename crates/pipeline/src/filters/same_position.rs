//! Filter to keep only players in the query player's position.
//!
//! Goalkeepers are a single position class, so on the goalkeeper
//! population this filter lets everything through.

use crate::traits::Filter;
use catalog::Catalog;
use similarity::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates whose position code equals the query player's.
///
/// Codes are compared as whole strings: "FW,MF" does not match "FW".
pub struct SamePositionFilter {
    catalog: Arc<Catalog>,
}

impl SamePositionFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for SamePositionFilter {
    fn name(&self) -> &str {
        "SamePositionFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &QueryContext) -> Vec<Candidate> {
        if !context.is_outfield() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_player(candidate.row)
                    .is_some_and(|player| player.position == context.position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{build_catalog, player};
    use catalog::Population;
    use similarity::build_query_context;

    #[test]
    fn test_same_position_filter() {
        let catalog = Arc::new(build_catalog(
            Population::Outfield,
            vec![
                player("Query", "FW", "Serie A", 25, None),
                player("Striker", "FW", "Serie A", 25, None),
                player("Hybrid", "FW,MF", "Serie A", 25, None),
                player("Defender", "DF", "Serie A", 25, None),
            ],
        ));
        let context = build_query_context(&catalog, "Query").unwrap();

        let candidates = vec![
            Candidate::new(1, 0.9),
            Candidate::new(2, 0.8),
            Candidate::new(3, 0.7),
        ];

        let filtered = SamePositionFilter::new(catalog).apply(candidates, &context);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].row, 1);
    }

    #[test]
    fn test_goalkeepers_pass_through() {
        let catalog = Arc::new(build_catalog(
            Population::Goalkeeper,
            vec![
                player("Query", "GK", "La Liga", 30, None),
                player("Other", "GK", "La Liga", 31, None),
            ],
        ));
        let context = build_query_context(&catalog, "Query").unwrap();

        let candidates = vec![Candidate::new(1, 0.9)];
        let filtered = SamePositionFilter::new(catalog).apply(candidates.clone(), &context);

        assert_eq!(filtered, candidates);
    }
}

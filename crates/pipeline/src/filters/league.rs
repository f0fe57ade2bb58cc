//! Filter to keep only players from one league.

use crate::traits::Filter;
use catalog::Catalog;
use similarity::{Candidate, QueryContext};
use std::sync::Arc;

/// Keeps candidates whose league is exactly `league`.
pub struct LeagueFilter {
    catalog: Arc<Catalog>,
    league: String,
}

impl LeagueFilter {
    /// Create a new LeagueFilter.
    ///
    /// # Arguments
    /// * `catalog` - Shared reference to the catalog for league lookups
    /// * `league` - League name, compared case-sensitively
    pub fn new(catalog: Arc<Catalog>, league: impl Into<String>) -> Self {
        Self {
            catalog,
            league: league.into(),
        }
    }
}

impl Filter for LeagueFilter {
    fn name(&self) -> &str {
        "LeagueFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &QueryContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_player(candidate.row)
                    .is_some_and(|player| player.league == self.league)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{build_catalog, player};
    use catalog::Population;

    #[test]
    fn test_league_filter() {
        let catalog = Arc::new(build_catalog(
            Population::Outfield,
            vec![
                player("Query", "MF", "Bundesliga", 25, None),
                player("A", "MF", "Serie A", 25, None),
                player("B", "MF", "Bundesliga", 25, None),
                player("C", "MF", "serie a", 25, None),
            ],
        ));
        let context = QueryContext::new("Query", 0, Population::Outfield);

        let candidates = vec![
            Candidate::new(1, 0.9),
            Candidate::new(2, 0.8),
            Candidate::new(3, 0.7),
        ];

        let filtered = LeagueFilter::new(catalog, "Serie A").apply(candidates, &context);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].row, 1);
    }

    #[test]
    fn test_unknown_league_yields_nothing() {
        let catalog = Arc::new(build_catalog(
            Population::Outfield,
            vec![
                player("Query", "MF", "Bundesliga", 25, None),
                player("A", "MF", "Serie A", 25, None),
            ],
        ));
        let context = QueryContext::new("Query", 0, Population::Outfield);

        let filtered =
            LeagueFilter::new(catalog, "Eredivisie").apply(vec![Candidate::new(1, 0.9)], &context);
        assert!(filtered.is_empty());
    }
}

//! Turns one similarity vector into the ranked, filtered, capped result
//! table for a query player.
//!
//! ## Algorithm
//! 1. Pair every catalog row with its score
//! 2. Sort by score, highest first; ties keep catalog order
//! 3. Drop the query player's own row (by row, not by rank)
//! 4. Position filter (outfield only)
//! 5. League filter
//! 6. Age filter, unless the bracket is the catalog's full range
//! 7. Preferred-foot filter (outfield only)
//! 8. Keep the first `result_count` rows
//! 9. Number the rows from 1
//!
//! Filters only remove rows, so the order from step 2 survives to the end.

use crate::error::RecommendError;
use crate::filter_pipeline::FilterPipeline;
use crate::filter_spec::{FilterSpec, FootFilter, LeagueSelection, PositionComparison};
use crate::filters::{
    AgeRangeFilter, LeagueFilter, PreferredFootFilter, SamePositionFilter, SelfExclusionFilter,
};
use catalog::{Catalog, Player, Population};
use similarity::{build_query_context, rank_candidates};
use std::sync::Arc;
use tracing::{debug, instrument};

/// One row of the ranked result table
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// 1-based display rank
    pub rank: usize,
    pub score: f32,
    pub player: Player,
}

/// Ranks and filters similarity vectors against one population's catalog.
///
/// Holds no per-request state: every call to `recommend` is a pure function
/// of its arguments and the immutable catalog.
#[derive(Debug, Clone)]
pub struct Ranker {
    catalog: Arc<Catalog>,
}

impl Ranker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Rank `scores` for `query` and apply `spec`.
    ///
    /// # Errors
    /// * `PopulationMismatch` / `VectorLengthMismatch` - the vector or the
    ///   requested population does not belong to this catalog
    /// * `UnknownPlayer` - `query` is not in the name index
    ///
    /// An empty table is a valid result, not an error.
    #[instrument(skip(self, scores, population, spec), fields(population = %population))]
    pub fn recommend(
        &self,
        query: &str,
        scores: &[f32],
        population: Population,
        spec: &FilterSpec,
    ) -> Result<Vec<RankedRow>, RecommendError> {
        if population != self.catalog.population() {
            return Err(RecommendError::PopulationMismatch {
                catalog: self.catalog.population(),
                requested: population,
            });
        }
        if scores.len() != self.catalog.len() {
            return Err(RecommendError::VectorLengthMismatch {
                expected: self.catalog.len(),
                found: scores.len(),
            });
        }

        let context = build_query_context(&self.catalog, query)?;
        let candidates = rank_candidates(scores);
        let pipeline = self.build_pipeline(spec);

        let mut filtered = pipeline.apply(candidates, &context);
        filtered.truncate(spec.result_count);

        let rows: Vec<RankedRow> = filtered
            .into_iter()
            .enumerate()
            .filter_map(|(idx, candidate)| {
                let player = self.catalog.get_player(candidate.row)?;
                Some(RankedRow {
                    rank: idx + 1,
                    score: candidate.score,
                    player: player.clone(),
                })
            })
            .collect();

        debug!("Ranked {} rows for {}", rows.len(), query);
        Ok(rows)
    }

    /// Assemble the filters a spec asks for, in application order.
    ///
    /// Filters that would keep every row are left out.
    pub fn build_pipeline(&self, spec: &FilterSpec) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new().add_filter(SelfExclusionFilter);

        if spec.position_comparison == PositionComparison::SamePosition {
            pipeline = pipeline.add_filter(SamePositionFilter::new(self.catalog.clone()));
        }

        if let LeagueSelection::Only(league) = &spec.league {
            pipeline = pipeline.add_filter(LeagueFilter::new(self.catalog.clone(), league.clone()));
        }

        if let Some(range) = spec.age_range {
            if range.covers(self.catalog.age_bounds()) {
                debug!("Age bracket {}-{} covers the catalog, skipping", range.min, range.max);
            } else {
                pipeline = pipeline.add_filter(AgeRangeFilter::new(self.catalog.clone(), range));
            }
        }

        if spec.preferred_foot != FootFilter::All {
            pipeline = pipeline.add_filter(PreferredFootFilter::new(
                self.catalog.clone(),
                spec.preferred_foot,
            ));
        }

        pipeline
    }
}

/// Free-standing form of [`Ranker::recommend`]
pub fn recommend(
    query: &str,
    scores: &[f32],
    catalog: &Arc<Catalog>,
    population: Population,
    spec: &FilterSpec,
) -> Result<Vec<RankedRow>, RecommendError> {
    Ranker::new(catalog.clone()).recommend(query, scores, population, spec)
}

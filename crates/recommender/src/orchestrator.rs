//! # Recommendation Orchestrator
//!
//! This module serves one recommendation request end to end:
//! 1. Pick the population's catalog and engine
//! 2. Fetch the query player's similarity vector
//! 3. Rank and filter it
//! 4. Format the rows for display
//!
//! Requests are independent: nothing is cached between them beyond the
//! loaded dataset.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument, warn};

use catalog::{Population, UnknownPlayerError};
use pipeline::{FilterSpec, RankedRow, RecommendError, Ranker};

use crate::config::RecommenderConfig;
use crate::dataset::Dataset;

/// One request from the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub population: Population,
    /// Display key of the query player
    pub player: String,
    pub spec: FilterSpec,
}

impl RecommendationRequest {
    pub fn new(population: Population, player: impl Into<String>, spec: FilterSpec) -> Self {
        Self {
            population,
            player: player.into(),
            spec,
        }
    }
}

/// One display row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecommendation {
    pub rank: usize,
    pub player: String,
    /// Score as a percentage string, e.g. "87%"
    pub similarity: String,
    pub score: f32,
    pub club: String,
    pub position: String,
    pub league: String,
    pub age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foot: Option<String>,
}

/// Display-ready result of one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResultTable {
    pub population: Population,
    pub query: String,
    pub rows: Vec<PlayerRecommendation>,
}

impl RankedResultTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Foot is only shown for outfield players
    pub fn shows_foot(&self) -> bool {
        self.population == Population::Outfield
    }
}

/// `score × 100` with `precision` decimals and a `%` suffix
pub fn format_similarity(score: f32, precision: usize) -> String {
    format!("{:.*}%", precision, score * 100.0)
}

/// Serves recommendation requests against a loaded dataset
#[derive(Debug, Clone)]
pub struct RecommendationOrchestrator {
    dataset: Arc<Dataset>,
    config: RecommenderConfig,
    outfield: Ranker,
    goalkeeper: Ranker,
}

impl RecommendationOrchestrator {
    pub fn new(dataset: Arc<Dataset>, config: RecommenderConfig) -> Self {
        let outfield = Ranker::new(dataset.catalog(Population::Outfield).clone());
        let goalkeeper = Ranker::new(dataset.catalog(Population::Goalkeeper).clone());
        Self {
            dataset,
            config,
            outfield,
            goalkeeper,
        }
    }

    /// Build an orchestrator on the process-wide dataset
    pub fn from_config(config: RecommenderConfig) -> Result<Self> {
        let dataset = Dataset::shared(&config.data_dir)?;
        Ok(Self::new(dataset, config))
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// The player preselected for a population
    pub fn default_player(&self, population: Population) -> Option<&str> {
        self.dataset
            .catalog(population)
            .default_player(&self.config.default_player_prefix)
    }

    /// Main entry point: rank players similar to `request.player`
    #[instrument(skip(self, request), fields(population = %request.population, player = %request.player))]
    pub fn get_recommendations(&self, request: &RecommendationRequest) -> Result<RankedResultTable> {
        let start_time = Instant::now();

        let data = self.dataset.population(request.population);
        let scores = data
            .scores_for(&request.player)
            .ok_or_else(|| RecommendError::from(UnknownPlayerError::new(&request.player)))?;

        let mut spec = request.spec.clone();
        if spec.result_count > self.config.max_results {
            warn!(
                "Requested {} results, capping at {}",
                spec.result_count, self.config.max_results
            );
            spec.result_count = self.config.max_results;
        }

        let rows = self
            .ranker(request.population)
            .recommend(&request.player, scores, request.population, &spec)
            .with_context(|| format!("Failed to rank players similar to '{}'", request.player))?;

        if rows.is_empty() && spec.result_count > 0 {
            warn!("No players left after filtering for '{}'", request.player);
        }

        let table = RankedResultTable {
            population: request.population,
            query: request.player.clone(),
            rows: rows
                .into_iter()
                .map(|row| self.format_row(row, request.population))
                .collect(),
        };

        info!(
            "Selected {} recommendations for '{}' in {:.2?}",
            table.len(),
            request.player,
            start_time.elapsed()
        );
        Ok(table)
    }

    fn ranker(&self, population: Population) -> &Ranker {
        match population {
            Population::Outfield => &self.outfield,
            Population::Goalkeeper => &self.goalkeeper,
        }
    }

    fn format_row(&self, row: RankedRow, population: Population) -> PlayerRecommendation {
        let RankedRow {
            rank,
            score,
            player,
        } = row;

        let foot = match population {
            Population::Outfield => player.foot.map(|foot| foot.to_string()),
            Population::Goalkeeper => None,
        };

        PlayerRecommendation {
            rank,
            similarity: format_similarity(score, self.config.precision),
            score,
            player: player.key,
            club: player.club,
            position: player.position,
            league: player.league,
            age: player.age,
            foot,
        }
    }
}

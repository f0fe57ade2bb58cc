//! # Recommender Crate
//!
//! Ties the workspace together: loads the catalog and similarity engine of
//! each population once, then serves recommendation requests against them.
//!
//! ## Main Components
//!
//! - **config**: Process defaults (data directory, default player, precision)
//! - **dataset**: Both populations loaded and cross-checked, cached per process
//! - **orchestrator**: Request in, display-ready result table out
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{RecommendationOrchestrator, RecommendationRequest, RecommenderConfig};
//!
//! let orchestrator = RecommendationOrchestrator::from_config(RecommenderConfig::new("data"))?;
//! let request = RecommendationRequest::new(Population::Outfield, "Nicolò Barella", FilterSpec::new());
//! for row in orchestrator.get_recommendations(&request)?.rows {
//!     println!("{:>2}. {} {}", row.rank, row.player, row.similarity);
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod orchestrator;

pub use config::RecommenderConfig;
pub use dataset::{Dataset, PopulationData};
pub use orchestrator::{
    format_similarity, PlayerRecommendation, RankedResultTable, RecommendationOrchestrator,
    RecommendationRequest,
};

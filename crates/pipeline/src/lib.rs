//! Ranking and filtering of similarity vectors.
//!
//! This crate provides:
//! - `FilterSpec`, the user's choices for one request
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - `Ranker`, which turns a similarity vector into a ranked result table
//!
//! ## Architecture
//! A request is processed in stages:
//! 1. The similarity vector is sorted into candidates, best first
//! 2. Filters remove candidates (the query player, other positions,
//!    other leagues, ages outside the bracket, the wrong foot)
//! 3. The survivors are capped at the requested count and numbered
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterSpec, FootFilter, Ranker};
//!
//! let ranker = Ranker::new(catalog.clone());
//! let spec = FilterSpec::new()
//!     .with_league("Serie A")
//!     .with_preferred_foot(FootFilter::Automatic)
//!     .with_age_range((20, 32))
//!     .with_result_count(5);
//!
//! let rows = ranker.recommend("Nicolò Barella", scores, Population::Outfield, &spec)?;
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filter_spec;
pub mod filters;
pub mod ranker;
pub mod traits;

// Re-export main types
pub use error::{ParseOptionError, RecommendError};
pub use filter_pipeline::FilterPipeline;
pub use filter_spec::{
    AgeRange, FilterSpec, FootFilter, LeagueSelection, PositionComparison, ALL_LEAGUES,
};
pub use ranker::{recommend, RankedRow, Ranker};
pub use traits::Filter;

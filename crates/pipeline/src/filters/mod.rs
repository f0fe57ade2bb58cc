//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod age_range;
pub mod league;
pub mod preferred_foot;
pub mod same_position;
pub mod self_exclusion;

// Re-export for convenience
pub use age_range::AgeRangeFilter;
pub use league::LeagueFilter;
pub use preferred_foot::PreferredFootFilter;
pub use same_position::SamePositionFilter;
pub use self_exclusion::SelfExclusionFilter;

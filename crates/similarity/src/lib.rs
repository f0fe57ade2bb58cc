//! # Similarity Crate
//!
//! Consumes the precomputed similarity model and turns its output into
//! ranked candidates for the filtering pipeline.
//!
//! ## Components
//!
//! - **engine**: `SimilarityEngine` trait and the `PrecomputedEngine` that
//!   serves score vectors from the offline artifact
//! - **candidates**: rank a score vector into `Candidate`s, highest first
//! - **query_context**: resolve the query player once per request
//!
//! How the scores are computed (PCA + cosine similarity) is not this
//! crate's concern; it only trusts that vector position `i` is catalog row
//! `i` of the same population.
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::{rank_candidates, build_query_context, PrecomputedEngine, SimilarityEngine};
//!
//! let engine = PrecomputedEngine::load_from_dir(Path::new("data"), Population::Outfield)?;
//! engine.validate_against(&catalog)?;
//!
//! let context = build_query_context(&catalog, "Cristiano Ronaldo")?;
//! let scores = engine.scores_for(&context.key).unwrap();
//! let candidates = rank_candidates(scores);
//! ```

// Public modules
pub mod types;
pub mod engine;
pub mod candidates;
pub mod query_context;

// Re-export commonly used types
pub use candidates::rank_candidates;
pub use engine::{PrecomputedEngine, SimilarityEngine};
pub use query_context::build_query_context;
pub use types::{Candidate, QueryContext};

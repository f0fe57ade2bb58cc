//! Turn a similarity vector into ranked candidates.
//!
//! Every catalog row becomes a candidate, ordered by score, highest first.
//! Ties keep catalog row order, so the ordering is fully determined by the
//! vector.

use crate::types::Candidate;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Rank every row of a similarity vector.
///
/// The sort is stable: equal scores stay in row order. NaN scores sort
/// after every real score.
#[instrument(skip(scores), fields(rows = scores.len()))]
pub fn rank_candidates(scores: &[f32]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = scores
        .iter()
        .enumerate()
        .map(|(row, &score)| Candidate::new(row, score))
        .collect();

    candidates.sort_by(|a, b| descending(a.score, b.score));

    debug!("Ranked {} candidates", candidates.len());
    candidates
}

fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

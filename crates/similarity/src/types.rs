//! Types shared between the similarity engine and the ranking pipeline.

use catalog::{Population, PreferredFoot, RowIndex};

/// One catalog row paired with its similarity to the query player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub row: RowIndex,
    /// Raw similarity score, 1.0 being identical
    pub score: f32,
}

impl Candidate {
    pub fn new(row: RowIndex, score: f32) -> Self {
        Self { row, score }
    }
}

/// What the filters need to know about the query player, resolved once
/// per request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    pub key: String,
    pub row: RowIndex,
    pub population: Population,
    pub position: String,
    pub foot: Option<PreferredFoot>,
}

impl QueryContext {
    pub fn new(key: impl Into<String>, row: RowIndex, population: Population) -> Self {
        Self {
            key: key.into(),
            row,
            population,
            position: String::new(),
            foot: None,
        }
    }

    pub fn is_outfield(&self) -> bool {
        self.population == Population::Outfield
    }
}

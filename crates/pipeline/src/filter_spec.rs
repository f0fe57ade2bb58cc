//! The user's filter choices for one recommendation request.
//!
//! A `FilterSpec` is built fresh from the current input on every request
//! and is not mutated once handed to the ranker.

use crate::error::ParseOptionError;
use catalog::{Age, PreferredFoot};
use std::fmt;
use std::str::FromStr;

/// Name the UI uses for "no league restriction"
pub const ALL_LEAGUES: &str = "All";

/// League restriction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeagueSelection {
    #[default]
    All,
    /// Exact league name, e.g. "Premier League"
    Only(String),
}

impl From<&str> for LeagueSelection {
    fn from(s: &str) -> Self {
        if s == ALL_LEAGUES {
            LeagueSelection::All
        } else {
            LeagueSelection::Only(s.to_string())
        }
    }
}

impl fmt::Display for LeagueSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueSelection::All => f.write_str(ALL_LEAGUES),
            LeagueSelection::Only(league) => f.write_str(league),
        }
    }
}

/// Preferred-foot restriction. Only meaningful for outfield players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FootFilter {
    #[default]
    All,
    /// Same foot as the query player
    Automatic,
    Left,
    Right,
}

impl FootFilter {
    /// The foot a candidate must have, given the query player's foot.
    ///
    /// `None` means no restriction. `Some(None)` means the query player's
    /// foot is unknown, which no candidate can match.
    pub fn required_foot(
        &self,
        query_foot: Option<PreferredFoot>,
    ) -> Option<Option<PreferredFoot>> {
        match self {
            FootFilter::All => None,
            FootFilter::Automatic => Some(query_foot),
            FootFilter::Left => Some(Some(PreferredFoot::Left)),
            FootFilter::Right => Some(Some(PreferredFoot::Right)),
        }
    }
}

impl FromStr for FootFilter {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FootFilter::All),
            "automatic" | "auto" => Ok(FootFilter::Automatic),
            "left" => Ok(FootFilter::Left),
            "right" => Ok(FootFilter::Right),
            _ => Err(ParseOptionError {
                option: "preferred foot",
                value: s.to_string(),
                expected: "all, automatic, left, right",
            }),
        }
    }
}

/// Whether candidates must play the query player's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionComparison {
    #[default]
    AllPositions,
    SamePosition,
}

impl FromStr for PositionComparison {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "all positions" => Ok(PositionComparison::AllPositions),
            "same" | "same position" => Ok(PositionComparison::SamePosition),
            _ => Err(ParseOptionError {
                option: "position comparison",
                value: s.to_string(),
                expected: "all, same",
            }),
        }
    }
}

/// Inclusive age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: Age,
    pub max: Age,
}

impl AgeRange {
    pub fn new(min: Age, max: Age) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: Age) -> bool {
        self.min <= age && age <= self.max
    }

    /// True when this range is exactly the catalog's observed range
    pub fn covers(&self, bounds: Option<(Age, Age)>) -> bool {
        bounds == Some((self.min, self.max))
    }
}

impl From<(Age, Age)> for AgeRange {
    fn from((min, max): (Age, Age)) -> Self {
        Self::new(min, max)
    }
}

/// Everything the ranker needs to know about the user's choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub league: LeagueSelection,
    pub preferred_foot: FootFilter,
    pub position_comparison: PositionComparison,
    /// `None` means the full observed age range
    pub age_range: Option<AgeRange>,
    /// Maximum number of rows returned
    pub result_count: usize,
}

impl FilterSpec {
    pub const DEFAULT_RESULT_COUNT: usize = 10;

    /// No restrictions, `DEFAULT_RESULT_COUNT` results
    pub fn new() -> Self {
        Self {
            league: LeagueSelection::All,
            preferred_foot: FootFilter::All,
            position_comparison: PositionComparison::AllPositions,
            age_range: None,
            result_count: Self::DEFAULT_RESULT_COUNT,
        }
    }

    pub fn with_league(mut self, league: impl Into<LeagueSelection>) -> Self {
        self.league = league.into();
        self
    }

    pub fn with_preferred_foot(mut self, foot: FootFilter) -> Self {
        self.preferred_foot = foot;
        self
    }

    pub fn with_position_comparison(mut self, comparison: PositionComparison) -> Self {
        self.position_comparison = comparison;
        self
    }

    pub fn with_age_range(mut self, range: impl Into<AgeRange>) -> Self {
        self.age_range = Some(range.into());
        self
    }

    pub fn with_result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new()
    }
}

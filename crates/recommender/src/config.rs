//! Library-side defaults for a recommender process.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
/// The player preselected when none is given
pub const DEFAULT_PLAYER_PREFIX: &str = "Cristiano Ronaldo";
/// Decimals shown in the similarity column
pub const DEFAULT_PRECISION: usize = 0;
/// Upper bound on rows per result table
pub const MAX_RESULT_COUNT: usize = 20;
/// Rows shown when the caller does not choose
pub const DEFAULT_RESULT_COUNT: usize = 5;
/// Age selector bounds and its initial bracket
pub const MIN_SELECTABLE_AGE: u8 = 15;
pub const MAX_SELECTABLE_AGE: u8 = 42;
pub const DEFAULT_AGE_RANGE: (u8, u8) = (20, 32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    pub data_dir: PathBuf,
    pub default_player_prefix: String,
    pub precision: usize,
    pub max_results: usize,
}

impl RecommenderConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_default_player_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_player_prefix = prefix.into();
        self
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_player_prefix: DEFAULT_PLAYER_PREFIX.to_string(),
            precision: DEFAULT_PRECISION,
            max_results: MAX_RESULT_COUNT,
        }
    }
}

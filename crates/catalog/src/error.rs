//! Error types for the catalog crate.
//!
//! Loading errors are fatal at startup: a catalog that fails to load has
//! missing or corrupt artifacts and there is nothing to recover.
//! Lookup errors mean the name index and the table disagree.

use thiserror::Error;

/// Errors that can occur while loading and validating catalog artifacts
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Artifact could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading an artifact
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The player table is not valid CSV
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A JSON artifact (name index or score lookup) is malformed
    #[error("JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A table row couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two paired artifacts disagree on how many rows there are
    #[error("Row count mismatch in {artifact}: expected {expected}, found {found}")]
    RowCountMismatch {
        artifact: String,
        expected: usize,
        found: usize,
    },

    /// Two name index keys point at the same table row
    #[error("Row {row} is claimed by both '{first}' and '{second}'")]
    DuplicateRow {
        row: usize,
        first: String,
        second: String,
    },

    /// The same display key appears twice
    #[error("Duplicate player key: {key}")]
    DuplicateKey { key: String },

    /// Referenced entity doesn't exist (e.g. a score vector for an unknown key)
    #[error("Missing reference: {entity} '{key}'")]
    MissingReference { entity: String, key: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// A player key that the name index does not know about.
///
/// The selector is populated from the same index, so hitting this in normal
/// operation means the index and the catalog are out of sync.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown player: {name}")]
pub struct UnknownPlayerError {
    pub name: String,
}

impl UnknownPlayerError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

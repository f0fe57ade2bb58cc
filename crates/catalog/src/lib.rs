//! # Catalog Crate
//!
//! This crate loads and indexes the player tables the recommender works on.
//! There is one catalog per population (outfield players, goalkeepers).
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Player, Population, PreferredFoot, Catalog)
//! - **parser**: Parse the CSV table and the JSON name index
//! - **index**: Join table and name index, validate the result
//! - **layout**: Artifact file names per population
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Population};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(Path::new("data"), Population::Outfield)?;
//!
//! let row = catalog.lookup("Cristiano Ronaldo")?;
//! let player = catalog.get_player(row).unwrap();
//! println!("{} plays {} in {}", player.key, player.position, player.league);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod layout;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result, UnknownPlayerError};
pub use layout::DataLayout;
pub use types::{
    // Type aliases
    Age,
    RowIndex,
    // Core types
    Catalog,
    Player,
    // Enums
    Population,
    PreferredFoot,
};

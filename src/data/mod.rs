//! Input tables: row types and the CSV loader.

pub mod loader;
pub mod types;

use serde::Serialize;
use std::path::{Path, PathBuf};

pub use loader::{load_deliveries, load_matches, load_tables};
pub use types::{DeliveryRecord, MatchRecord, Tables, TossDecision};

/// Default file name for the ball-by-ball table inside a data directory.
pub const DEFAULT_DELIVERIES_FILE: &str = "deliveries.csv";
/// Default file name for the match results table inside a data directory.
pub const DEFAULT_MATCHES_FILE: &str = "matches.csv";

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DataPaths {
    pub deliveries: PathBuf,
    pub matches: PathBuf,
}

impl DataPaths {
    pub fn new(deliveries: impl Into<PathBuf>, matches: impl Into<PathBuf>) -> Self {
        Self {
            deliveries: deliveries.into(),
            matches: matches.into(),
        }
    }

    /// The default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_DELIVERIES_FILE),
            dir.join(DEFAULT_MATCHES_FILE),
        )
    }
}

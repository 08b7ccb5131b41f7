//! Statistics derived from the loaded tables.

pub mod aggregate;
pub mod toss;

pub use aggregate::{season_stats, SeasonStats};
pub use toss::{toss_analysis, TossAnalysis};

//! IPL Match Statistics Library
//!
//! Loads a league's ball-by-ball deliveries and match results, derives
//! per-season aggregates and toss statistics, and maps them to declarative
//! chart specifications laid out on a toggleable dashboard page.
//!
//! ## Features
//!
//! - **Loading**: CSV input with tolerant column naming and typed rows
//! - **Season Aggregates**: Matches, total runs and runs per match, joined on season
//! - **Toss Analysis**: Toss wins, decisions, and whether the toss winner won
//! - **Charts**: Bar, line, donut and grouped-histogram specs with a highlight palette
//! - **Memoization**: Content-hash keyed caches so unchanged inputs are never recomputed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipl_stats::{
//!     commands::common::{Pipeline, PipelineCaches},
//!     data::DataPaths,
//!     Season,
//! };
//!
//! # fn example() -> ipl_stats::Result<()> {
//! let caches = PipelineCaches::default();
//! let output = Pipeline::new(&caches).run(&DataPaths::in_dir("data".as_ref()))?;
//!
//! let runs_2008 = output.season_stats.runs_per_season.get(&Season::new(2008));
//! println!("Runs in 2008: {:?}", runs_2008);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a directory holding `deliveries.csv` and `matches.csv`:
//! ```bash
//! export IPL_STATS_DATA_DIR=/path/to/data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod data;
pub mod error;
pub mod present;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{ids::MatchId, time::Season, toggles::ChartGroup, toggles::Toggles};
pub use data::{DeliveryRecord, MatchRecord, Tables, TossDecision};
pub use error::{Result, StatsError};
pub use stats::{SeasonStats, TossAnalysis};

pub const DATA_DIR_ENV_VAR: &str = "IPL_STATS_DATA_DIR";

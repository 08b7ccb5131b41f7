//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{time::Season, toggles::ChartGroup};

/// Input file options shared between commands
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Directory holding `deliveries.csv` and `matches.csv` (or set `IPL_STATS_DATA_DIR`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Ball-by-ball deliveries CSV (overrides the data directory).
    #[clap(long)]
    pub deliveries: Option<PathBuf>,

    /// Match results CSV (overrides the data directory).
    #[clap(long = "matches-file")]
    pub matches: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "ipl-stats", about = "IPL match history statistics")]
pub struct IplStats {
    /// Log progress (equivalent to `RUST_LOG=info`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print matches, runs and runs per match for every season, plus toss statistics.
    Summary {
        #[clap(flatten)]
        inputs: InputArgs,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },

    /// Render the dashboard page with the selected chart groups visible.
    ///
    /// Each `--show` flag switches on one group, mirroring a checkbox.
    Dashboard {
        #[clap(flatten)]
        inputs: InputArgs,

        /// Chart group to show (repeatable): `--show matches --show toss`.
        #[clap(long = "show", value_enum)]
        groups: Vec<ChartGroup>,

        /// Show every chart group.
        #[clap(long, conflicts_with = "groups")]
        all: bool,

        /// Emit the page as JSON chart specifications.
        #[clap(long)]
        json: bool,

        /// Season drawn in the highlight colour on the matches chart.
        #[clap(long)]
        highlight_season: Option<Season>,
    },

    /// Toggle chart groups from stdin and re-render after every change.
    Interactive {
        #[clap(flatten)]
        inputs: InputArgs,

        /// Emit each rendered page as JSON.
        #[clap(long)]
        json: bool,

        /// Season drawn in the highlight colour on the matches chart.
        #[clap(long)]
        highlight_season: Option<Season>,
    },
}

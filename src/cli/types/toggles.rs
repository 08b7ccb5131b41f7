//! Chart group toggles for the dashboard page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One independently toggled group of charts on the dashboard.
///
/// The toss group reveals four sub-charts; every other group shows a single
/// full-width chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChartGroup {
    /// Number of matches played in each season
    Matches,
    /// Total runs scored in each season
    Runs,
    /// Runs scored per match in each season
    RunsPerMatch,
    /// Toss winners, decisions and outcomes
    Toss,
}

impl ChartGroup {
    pub const ALL: [ChartGroup; 4] = [
        ChartGroup::Matches,
        ChartGroup::Runs,
        ChartGroup::RunsPerMatch,
        ChartGroup::Toss,
    ];

    /// Checkbox label shown next to the toggle.
    pub fn label(&self) -> &'static str {
        match self {
            ChartGroup::Matches => "Show Number of matches played in different seasons",
            ChartGroup::Runs => "Show Total Runs Across the Seasons",
            ChartGroup::RunsPerMatch => "Show Runs scored per match across seasons",
            ChartGroup::Toss => "Show Toss Analysis",
        }
    }
}

impl fmt::Display for ChartGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartGroup::Matches => "matches",
            ChartGroup::Runs => "runs",
            ChartGroup::RunsPerMatch => "runs-per-match",
            ChartGroup::Toss => "toss",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ChartGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "matches" => Ok(ChartGroup::Matches),
            "runs" => Ok(ChartGroup::Runs),
            "runs-per-match" | "rpm" => Ok(ChartGroup::RunsPerMatch),
            "toss" => Ok(ChartGroup::Toss),
            other => Err(format!("unknown chart group: {}", other)),
        }
    }
}

/// Visibility flag per chart group. All groups start hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Toggles {
    pub matches: bool,
    pub runs: bool,
    pub runs_per_match: bool,
    pub toss: bool,
}

impl Toggles {
    /// Every group visible.
    pub fn all() -> Self {
        Self {
            matches: true,
            runs: true,
            runs_per_match: true,
            toss: true,
        }
    }

    /// Toggles with exactly the given groups switched on.
    pub fn from_groups(groups: &[ChartGroup]) -> Self {
        let mut toggles = Self::default();
        for group in groups {
            toggles.set(*group, true);
        }
        toggles
    }

    pub fn is_on(&self, group: ChartGroup) -> bool {
        match group {
            ChartGroup::Matches => self.matches,
            ChartGroup::Runs => self.runs,
            ChartGroup::RunsPerMatch => self.runs_per_match,
            ChartGroup::Toss => self.toss,
        }
    }

    pub fn set(&mut self, group: ChartGroup, on: bool) {
        match group {
            ChartGroup::Matches => self.matches = on,
            ChartGroup::Runs => self.runs = on,
            ChartGroup::RunsPerMatch => self.runs_per_match = on,
            ChartGroup::Toss => self.toss = on,
        }
    }

    /// Flip one group, returning its new state.
    pub fn toggle(&mut self, group: ChartGroup) -> bool {
        let on = !self.is_on(group);
        self.set(group, on);
        on
    }

    pub fn any(&self) -> bool {
        ChartGroup::ALL.iter().any(|g| self.is_on(*g))
    }
}

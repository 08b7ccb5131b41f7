//! Page layout: which charts are visible and where they sit.

use serde::Serialize;

use super::chart::ChartSpec;
use super::charts::{
    matches_chart, runs_chart, runs_per_match_chart, toss_by_season_chart, toss_decision_chart,
    toss_outcome_chart, toss_wins_chart, PresenterConfig,
};
use crate::cli::types::toggles::{ChartGroup, Toggles};
use crate::stats::{toss::TossAnalysis, SeasonStats};

pub const PAGE_TITLE: &str = "IPL Matches Analysis";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleState {
    pub group: ChartGroup,
    pub label: String,
    pub on: bool,
}

/// A visible block on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Panel {
    FullWidth {
        group: ChartGroup,
        chart: ChartSpec,
    },
    /// Two side-by-side columns, each holding charts stacked top to bottom.
    Columns {
        group: ChartGroup,
        left: Vec<ChartSpec>,
        right: Vec<ChartSpec>,
    },
}

impl Panel {
    pub fn group(&self) -> ChartGroup {
        match self {
            Panel::FullWidth { group, .. } | Panel::Columns { group, .. } => *group,
        }
    }

    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            Panel::FullWidth { chart, .. } => vec![chart],
            Panel::Columns { left, right, .. } => left.iter().chain(right.iter()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: String,
    pub toggles: Vec<ToggleState>,
    pub panels: Vec<Panel>,
}

/// Lay out the page for the current toggles.
///
/// Only charts whose group is switched on are built. Panel order is fixed:
/// matches, runs, runs per match, toss.
pub fn render_page(
    stats: &SeasonStats,
    toss: &TossAnalysis,
    toggles: &Toggles,
    config: &PresenterConfig,
) -> Page {
    let toggle_states = ChartGroup::ALL
        .iter()
        .map(|group| ToggleState {
            group: *group,
            label: group.label().to_string(),
            on: toggles.is_on(*group),
        })
        .collect();

    let panels = ChartGroup::ALL
        .iter()
        .filter(|group| toggles.is_on(**group))
        .map(|group| match group {
            ChartGroup::Matches => Panel::FullWidth {
                group: *group,
                chart: matches_chart(stats, config),
            },
            ChartGroup::Runs => Panel::FullWidth {
                group: *group,
                chart: runs_chart(stats, config),
            },
            ChartGroup::RunsPerMatch => Panel::FullWidth {
                group: *group,
                chart: runs_per_match_chart(stats, config),
            },
            ChartGroup::Toss => Panel::Columns {
                group: *group,
                left: vec![
                    toss_wins_chart(toss, config),
                    toss_by_season_chart(toss, config),
                ],
                right: vec![
                    toss_decision_chart(toss, config),
                    toss_outcome_chart(toss, config),
                ],
            },
        })
        .collect();

    Page {
        title: PAGE_TITLE.to_string(),
        toggles: toggle_states,
        panels,
    }
}

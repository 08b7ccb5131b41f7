//! One chart builder per aggregate.

use super::chart::{ChartId, ChartKind, ChartSpec, MarkerLine, Palette, Point, Series};
use crate::cli::types::time::Season;
use crate::stats::{toss::TossAnalysis, SeasonStats};

/// Position highlighted on the matches chart when no season is configured.
pub const DEFAULT_HIGHLIGHT_POSITION: usize = 5;

const TITLE_SIZE: u8 = 26;
const PIE_TITLE_SIZE: u8 = 30;
const PIE_HOLE: f64 = 0.3;
const BAR_OUTLINE: f64 = 2.5;
const PIE_OUTLINE: f64 = 3.0;
const TEMPLATE: &str = "simple_white";

/// Settings that change how charts look but not what they show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterConfig {
    pub palette: Palette,
    /// Season drawn in the highlight colour on the matches chart.
    pub highlight_season: Option<Season>,
}

fn base_chart(id: ChartId, title: &str, kind: ChartKind) -> ChartSpec {
    ChartSpec {
        id,
        title: title.to_string(),
        title_font_size: TITLE_SIZE,
        kind,
        x_label: None,
        y_label: None,
        template: Some(TEMPLATE.to_string()),
        marker_line: None,
        series: Vec::new(),
    }
}

fn pie_chart(id: ChartId, title: &str, points: Vec<Point>, palette: &Palette) -> ChartSpec {
    let colors = palette.highlighted(points.len(), Some(0));
    ChartSpec {
        title_font_size: PIE_TITLE_SIZE,
        template: None,
        marker_line: Some(MarkerLine {
            color: "#000000".to_string(),
            width: PIE_OUTLINE,
        }),
        series: vec![Series {
            name: None,
            points,
            colors,
        }],
        ..base_chart(id, title, ChartKind::Pie { hole: PIE_HOLE })
    }
}

/// Bar chart of matches played per season.
pub fn matches_chart(stats: &SeasonStats, config: &PresenterConfig) -> ChartSpec {
    let points: Vec<Point> = stats
        .matches_per_season
        .iter()
        .map(|(season, count)| Point::new(season.to_string(), f64::from(*count)))
        .collect();

    let highlight = match config.highlight_season {
        Some(season) => stats.matches_per_season.keys().position(|s| *s == season),
        None => Some(DEFAULT_HIGHLIGHT_POSITION),
    };
    let colors = config.palette.highlighted(points.len(), highlight);

    ChartSpec {
        x_label: Some("Season".to_string()),
        y_label: Some("Count".to_string()),
        marker_line: Some(MarkerLine::black(BAR_OUTLINE)),
        series: vec![Series {
            name: Some("matches".to_string()),
            points,
            colors,
        }],
        ..base_chart(
            ChartId::MatchesPerSeason,
            "Number of matches played in different seasons",
            ChartKind::Bar,
        )
    }
}

/// Line chart of total runs per season.
pub fn runs_chart(stats: &SeasonStats, config: &PresenterConfig) -> ChartSpec {
    let points = stats
        .runs_per_season
        .iter()
        .map(|(season, runs)| Point::new(season.to_string(), *runs as f64))
        .collect();

    ChartSpec {
        x_label: Some("Season".to_string()),
        y_label: Some("total_runs".to_string()),
        series: vec![Series {
            name: Some("total_runs".to_string()),
            points,
            colors: vec![config.palette.base.to_string()],
        }],
        ..base_chart(
            ChartId::RunsPerSeason,
            "Total Runs Across the Seasons",
            ChartKind::Line,
        )
    }
}

/// Line chart of runs per match per season.
pub fn runs_per_match_chart(stats: &SeasonStats, config: &PresenterConfig) -> ChartSpec {
    let points = stats
        .runs_per_match
        .iter()
        .map(|(season, ratio)| Point::new(season.to_string(), *ratio))
        .collect();

    ChartSpec {
        x_label: Some("Season".to_string()),
        y_label: Some("Runs scored per match".to_string()),
        series: vec![Series {
            name: Some("Runs scored per match".to_string()),
            points,
            colors: vec![config.palette.base.to_string()],
        }],
        ..base_chart(
            ChartId::RunsPerMatch,
            "Runs scored per match across seasons",
            ChartKind::Line,
        )
    }
}

/// Bar chart of toss wins per team, top team highlighted.
pub fn toss_wins_chart(toss: &TossAnalysis, config: &PresenterConfig) -> ChartSpec {
    let points: Vec<Point> = toss
        .wins_by_team
        .iter()
        .map(|w| Point::new(w.team.clone(), f64::from(w.count)))
        .collect();
    let colors = config.palette.highlighted(points.len(), Some(0));

    ChartSpec {
        x_label: Some("Team".to_string()),
        y_label: Some("Count".to_string()),
        marker_line: Some(MarkerLine::black(BAR_OUTLINE)),
        series: vec![Series {
            name: Some("toss wins".to_string()),
            points,
            colors,
        }],
        ..base_chart(
            ChartId::TossWins,
            "No. of tosses won by each team",
            ChartKind::Bar,
        )
    }
}

/// Donut of toss decision percentages, most common decision highlighted.
pub fn toss_decision_chart(toss: &TossAnalysis, config: &PresenterConfig) -> ChartSpec {
    let points = toss
        .decision_shares
        .iter()
        .map(|s| Point::new(s.decision.to_string(), s.percent))
        .collect();

    pie_chart(
        ChartId::TossDecision,
        "Toss decision percentage",
        points,
        &config.palette,
    )
}

/// Grouped histogram of toss decisions in each season.
pub fn toss_by_season_chart(toss: &TossAnalysis, config: &PresenterConfig) -> ChartSpec {
    // Series follow the overall decision ranking so the top decision takes the highlight colour
    let decisions: Vec<_> = toss.decision_shares.iter().map(|s| s.decision).collect();
    let colors = config.palette.highlighted(decisions.len(), Some(0));

    let series = decisions
        .iter()
        .zip(colors)
        .map(|(decision, color)| Series {
            name: Some(decision.to_string()),
            points: toss
                .decisions_by_season
                .iter()
                .map(|(season, counts)| {
                    let count = counts.get(decision).copied().unwrap_or(0);
                    Point::new(season.to_string(), f64::from(count))
                })
                .collect(),
            colors: vec![color],
        })
        .collect();

    ChartSpec {
        x_label: Some("Season".to_string()),
        y_label: Some("count".to_string()),
        marker_line: Some(MarkerLine::black(BAR_OUTLINE)),
        series,
        ..base_chart(
            ChartId::TossDecisionBySeason,
            "Toss decision in different seasons",
            ChartKind::GroupedHistogram,
        )
    }
}

/// Donut of whether the toss winner also won the match.
pub fn toss_outcome_chart(toss: &TossAnalysis, config: &PresenterConfig) -> ChartSpec {
    let points = vec![
        Point::new("Yes", f64::from(toss.outcome.yes)),
        Point::new("No", f64::from(toss.outcome.no)),
    ];

    pie_chart(
        ChartId::TossWinMatchWin,
        "Winning toss implies winning matches?",
        points,
        &config.palette,
    )
}

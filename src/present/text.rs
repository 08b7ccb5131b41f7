//! Plain-text rendering of pages and summary tables for the terminal.

use std::fmt;

use super::chart::{ChartKind, ChartSpec, Palette, Series};
use super::dashboard::{Page, Panel};
use crate::stats::{toss::TossAnalysis, SeasonStats};

const BAR_WIDTH: f64 = 40.0;

fn format_value(value: f64) -> String {
    if !value.is_finite() {
        "n/a".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn bar(value: f64, max: f64) -> String {
    if !value.is_finite() || max <= 0.0 {
        return String::new();
    }
    "#".repeat(((value / max) * BAR_WIDTH).round().max(0.0) as usize)
}

fn point_share(series: &Series, value: f64) -> f64 {
    let total: f64 = series.points.iter().map(|p| p.value).sum();
    if total > 0.0 {
        (value / total * 1000.0).round() / 10.0
    } else {
        0.0
    }
}

struct ChartText<'a> {
    chart: &'a ChartSpec,
    palette: &'a Palette,
}

impl fmt::Display for ChartText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.chart;
        writeln!(f, "{}", chart.title)?;
        writeln!(f, "{}", "-".repeat(chart.title.len()))?;

        let max = chart
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        for series in &chart.series {
            if chart.series.len() > 1 {
                if let Some(name) = &series.name {
                    writeln!(f, "[{}]", name)?;
                }
            }
            for (i, point) in series.points.iter().enumerate() {
                let highlighted = series.colors.len() > 1
                    && series.colors.get(i).map(String::as_str) == Some(self.palette.highlight);
                let marker = if highlighted { "*" } else { " " };
                let value = match chart.kind {
                    ChartKind::Pie { .. } => {
                        format!("{}%", format_value(point_share(series, point.value)))
                    }
                    _ => format_value(point.value),
                };
                writeln!(
                    f,
                    "{}{:<28} {:>10}  {}",
                    marker,
                    point.label,
                    value,
                    bar(point.value, max)
                )?;
            }
        }
        Ok(())
    }
}

struct PageText<'a> {
    page: &'a Page,
    palette: &'a Palette,
}

impl fmt::Display for PageText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        writeln!(f, "{}", page.title)?;
        writeln!(f, "{}", "=".repeat(page.title.len()))?;
        for toggle in &page.toggles {
            let mark = if toggle.on { "x" } else { " " };
            writeln!(f, "[{}] {}", mark, toggle.label)?;
        }

        for panel in &page.panels {
            writeln!(f)?;
            match panel {
                Panel::FullWidth { chart, .. } => write!(f, "{}", self.chart(chart))?,
                Panel::Columns { left, right, .. } => {
                    for (column, charts) in [("Left column", left), ("Right column", right)] {
                        writeln!(f, "== {} ==", column)?;
                        for chart in charts {
                            writeln!(f, "{}", self.chart(chart))?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> PageText<'a> {
    fn chart(&self, chart: &'a ChartSpec) -> ChartText<'a> {
        ChartText {
            chart,
            palette: self.palette,
        }
    }
}

struct SummaryText<'a> {
    stats: &'a SeasonStats,
    toss: &'a TossAnalysis,
}

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (stats, toss) = (self.stats, self.toss);
        writeln!(
            f,
            "{:<8} {:>8} {:>12} {:>14}",
            "Season", "Matches", "Total runs", "Runs/match"
        )?;
        for season in stats.seasons() {
            let matches = stats.matches_per_season.get(&season).copied().unwrap_or(0);
            let runs = stats.runs_per_season.get(&season).copied().unwrap_or(0);
            let ratio = stats
                .runs_per_match
                .get(&season)
                .copied()
                .unwrap_or(f64::NAN);
            let ratio = if ratio.is_finite() {
                format!("{:.2}", ratio)
            } else {
                "n/a".to_string()
            };
            writeln!(
                f,
                "{:<8} {:>8} {:>12} {:>14}",
                season.to_string(),
                matches,
                runs,
                ratio
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Toss wins by team:")?;
        for w in &toss.wins_by_team {
            writeln!(f, "  {:<32} {:>5}", w.team, w.count)?;
        }
        writeln!(f, "Toss decisions:")?;
        for s in &toss.decision_shares {
            writeln!(
                f,
                "  {:<32} {:>5} ({:.1}%)",
                s.decision.to_string(),
                s.count,
                s.percent
            )?;
        }
        writeln!(
            f,
            "Toss winner won the match: Yes {} / No {}",
            toss.outcome.yes, toss.outcome.no
        )
    }
}

/// Render one chart as labelled rows; highlighted points are starred.
pub fn chart_to_text(chart: &ChartSpec, palette: &Palette) -> String {
    ChartText { chart, palette }.to_string()
}

/// Render the whole page: title, checkbox states, then visible panels.
pub fn page_to_text(page: &Page, palette: &Palette) -> String {
    PageText { page, palette }.to_string()
}

/// Per-season table plus toss headline numbers.
pub fn summary_to_text(stats: &SeasonStats, toss: &TossAnalysis) -> String {
    SummaryText { stats, toss }.to_string()
}

//! Declarative chart specifications.
//!
//! A [`ChartSpec`] says what to draw, never how: kind, title, labelled data
//! points and per-point colours. Serialized as JSON it is the handoff to
//! whatever renders the charts.

use serde::Serialize;

/// Which chart a spec describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    MatchesPerSeason,
    RunsPerSeason,
    RunsPerMatch,
    TossWins,
    TossDecision,
    TossDecisionBySeason,
    TossWinMatchWin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    /// Donut when `hole` is above zero.
    Pie { hole: f64 },
    /// Bars grouped side by side, one series per category.
    GroupedHistogram,
}

/// Outline drawn around bars and pie slices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub color: String,
    pub width: f64,
}

impl MarkerLine {
    pub fn black(width: f64) -> Self {
        Self {
            color: "black".to_string(),
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    /// `null` in JSON when not finite.
    pub value: f64,
}

impl Point {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub points: Vec<Point>,
    /// One colour per point, or a single colour for the whole series.
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub title: String,
    pub title_font_size: u8,
    pub kind: ChartKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_line: Option<MarkerLine>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// All points of a single-series chart.
    pub fn points(&self) -> &[Point] {
        self.series.first().map(|s| s.points.as_slice()).unwrap_or(&[])
    }
}

/// Fixed two-colour palette: every category in `base`, one in `highlight`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub base: &'static str,
    pub highlight: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: "turquoise",
            highlight: "crimson",
        }
    }
}

impl Palette {
    /// `len` colours, with position `index` (if in range) highlighted.
    pub fn highlighted(&self, len: usize, index: Option<usize>) -> Vec<String> {
        (0..len)
            .map(|i| {
                if Some(i) == index {
                    self.highlight.to_string()
                } else {
                    self.base.to_string()
                }
            })
            .collect()
    }
}

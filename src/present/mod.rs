//! Mapping of aggregates to chart specifications and page layout.

pub mod chart;
pub mod charts;
pub mod dashboard;
pub mod text;

pub use chart::{ChartId, ChartKind, ChartSpec, Palette};
pub use charts::PresenterConfig;
pub use dashboard::{render_page, Page, Panel};

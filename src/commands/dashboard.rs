//! Dashboard command implementation

use super::{
    common::{Pipeline, PipelineCaches, PipelineOutput},
    resolve_data_paths,
};
use crate::{
    cli::{
        types::toggles::{ChartGroup, Toggles},
        InputArgs,
    },
    present::{render_page, text::page_to_text, PresenterConfig},
    Result, Season,
};

/// Configuration for one dashboard render.
#[derive(Debug)]
pub struct DashboardParams {
    pub inputs: InputArgs,
    pub groups: Vec<ChartGroup>,
    pub all: bool,
    pub as_json: bool,
    pub highlight_season: Option<Season>,
}

impl DashboardParams {
    pub fn toggles(&self) -> Toggles {
        if self.all {
            Toggles::all()
        } else {
            Toggles::from_groups(&self.groups)
        }
    }
}

/// Render the page for `toggles` from pipeline output, as text or JSON.
pub fn format_page(
    output: &PipelineOutput,
    toggles: &Toggles,
    config: &PresenterConfig,
    as_json: bool,
) -> Result<String> {
    let page = render_page(&output.season_stats, &output.toss, toggles, config);
    if as_json {
        Ok(serde_json::to_string_pretty(&page)?)
    } else {
        Ok(page_to_text(&page, &config.palette))
    }
}

/// Handle the dashboard command
pub fn handle_dashboard(params: DashboardParams) -> Result<()> {
    let paths = resolve_data_paths(&params.inputs);
    let toggles = params.toggles();
    let config = PresenterConfig {
        highlight_season: params.highlight_season,
        ..PresenterConfig::default()
    };

    let caches = PipelineCaches::default();
    let output = Pipeline::new(&caches).run(&paths)?;

    println!(
        "{}",
        format_page(&output, &toggles, &config, params.as_json)?
    );
    Ok(())
}

//! Summary command implementation

use serde::Serialize;

use super::{
    common::{Pipeline, PipelineCaches},
    resolve_data_paths,
};
use crate::{
    cli::InputArgs,
    present::text::summary_to_text,
    stats::{SeasonStats, TossAnalysis},
    Result,
};

/// JSON payload of the summary command.
#[derive(Debug, Serialize)]
pub struct SummaryOutput<'a> {
    pub season_stats: &'a SeasonStats,
    pub toss: &'a TossAnalysis,
}

/// Render the summary as text or pretty JSON.
pub fn format_summary(stats: &SeasonStats, toss: &TossAnalysis, as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(&SummaryOutput {
            season_stats: stats,
            toss,
        })?)
    } else {
        Ok(summary_to_text(stats, toss))
    }
}

/// Handle the summary command
pub fn handle_summary(inputs: InputArgs, as_json: bool) -> Result<()> {
    let paths = resolve_data_paths(&inputs);
    log::info!(
        "Loading deliveries from {} and matches from {}",
        paths.deliveries.display(),
        paths.matches.display()
    );

    let caches = PipelineCaches::default();
    let output = Pipeline::new(&caches).run(&paths)?;

    println!(
        "{}",
        format_summary(&output.season_stats, &output.toss, as_json)?
    );
    Ok(())
}

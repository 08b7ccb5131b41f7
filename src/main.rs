//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use ipl_stats::{
    cli::{Commands, IplStats},
    commands::{
        dashboard::{handle_dashboard, DashboardParams},
        interactive::handle_interactive,
        summary::handle_summary,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = IplStats::parse();

    let default_level = if app.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match app.command {
        Commands::Summary { inputs, json } => handle_summary(inputs, json)?,

        Commands::Dashboard {
            inputs,
            groups,
            all,
            json,
            highlight_season,
        } => handle_dashboard(DashboardParams {
            inputs,
            groups,
            all,
            as_json: json,
            highlight_season,
        })?,

        Commands::Interactive {
            inputs,
            json,
            highlight_season,
        } => handle_interactive(inputs, json, highlight_season)?,
    }

    Ok(())
}

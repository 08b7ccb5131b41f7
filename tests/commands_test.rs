//! Integration tests for command handlers and CLI parsing

use clap::Parser;
use ipl_stats::{
    cli::{Commands, InputArgs, IplStats},
    commands::{
        common::{Pipeline, PipelineCaches},
        dashboard::{format_page, DashboardParams},
        resolve_data_paths,
        summary::format_summary,
    },
    present::PresenterConfig,
    ChartGroup, Season, Toggles, DATA_DIR_ENV_VAR,
};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn no_inputs() -> InputArgs {
    InputArgs {
        data_dir: None,
        deliveries: None,
        matches: None,
    }
}

fn write_fixture(dir: &TempDir) {
    fs::write(
        dir.path().join("deliveries.csv"),
        "ID,innings,total_run\n1,1,100\n2,1,70\n2,2,50\n3,1,90\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("matches.csv"),
        "ID,Date,Season,TossWinner,TossDecision,WinningTeam\n\
         1,2008-04-18,2007/08,Kolkata Knight Riders,field,Kolkata Knight Riders\n\
         2,2008-04-19,2007/08,Chennai Super Kings,bat,Chennai Super Kings\n\
         3,2009-04-18,2009,Mumbai Indians,field,NA\n",
    )
    .unwrap();
}

// Environment-variable resolution is checked in a single test so parallel
// tests never observe each other's settings.
#[test]
fn test_resolve_data_paths_precedence() {
    std::env::remove_var(DATA_DIR_ENV_VAR);

    let paths = resolve_data_paths(&no_inputs());
    assert_eq!(paths.deliveries, PathBuf::from("./deliveries.csv"));
    assert_eq!(paths.matches, PathBuf::from("./matches.csv"));

    std::env::set_var(DATA_DIR_ENV_VAR, "/srv/ipl");
    let paths = resolve_data_paths(&no_inputs());
    assert_eq!(paths.deliveries, PathBuf::from("/srv/ipl/deliveries.csv"));

    let inputs = InputArgs {
        data_dir: Some(PathBuf::from("/data")),
        deliveries: None,
        matches: Some(PathBuf::from("/other/results.csv")),
    };
    let paths = resolve_data_paths(&inputs);
    assert_eq!(paths.deliveries, PathBuf::from("/data/deliveries.csv"));
    assert_eq!(paths.matches, PathBuf::from("/other/results.csv"));

    std::env::remove_var(DATA_DIR_ENV_VAR);
}

#[test]
fn test_cli_parses_dashboard_flags() {
    let app = IplStats::try_parse_from([
        "ipl-stats",
        "dashboard",
        "--show",
        "matches",
        "--show",
        "runs-per-match",
        "--highlight-season",
        "2013",
        "--data-dir",
        "data",
        "--json",
    ])
    .unwrap();

    match app.command {
        Commands::Dashboard {
            inputs,
            groups,
            all,
            json,
            highlight_season,
        } => {
            assert_eq!(groups, vec![ChartGroup::Matches, ChartGroup::RunsPerMatch]);
            assert!(!all);
            assert!(json);
            assert_eq!(highlight_season, Some(Season::new(2013)));
            assert_eq!(inputs.data_dir, Some(PathBuf::from("data")));

            let params = DashboardParams {
                inputs,
                groups,
                all,
                as_json: json,
                highlight_season,
            };
            assert_eq!(
                params.toggles(),
                Toggles::from_groups(&[ChartGroup::Matches, ChartGroup::RunsPerMatch])
            );
        }
        other => panic!("Expected Dashboard command, got {:?}", other),
    }
}

#[test]
fn test_cli_rejects_all_with_show() {
    let result =
        IplStats::try_parse_from(["ipl-stats", "dashboard", "--all", "--show", "toss"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_bad_season() {
    let result =
        IplStats::try_parse_from(["ipl-stats", "dashboard", "--highlight-season", "2013/14"]);
    assert!(result.is_err());
}

#[test]
fn test_summary_json_output() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir);
    let caches = PipelineCaches::default();
    let output = Pipeline::new(&caches)
        .run(&ipl_stats::data::DataPaths::in_dir(dir.path()))
        .unwrap();

    let json = format_summary(&output.season_stats, &output.toss, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["season_stats"]["matches_per_season"]["2008"], 2);
    assert_eq!(value["season_stats"]["runs_per_season"]["2008"], 220);
    assert_eq!(value["season_stats"]["runs_per_match"]["2009"], 90.0);
    assert_eq!(value["toss"]["outcome"]["yes"], 2);
    assert_eq!(value["toss"]["outcome"]["no"], 1);
}

#[test]
fn test_dashboard_text_and_json() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir);
    let caches = PipelineCaches::default();
    let output = Pipeline::new(&caches)
        .run(&ipl_stats::data::DataPaths::in_dir(dir.path()))
        .unwrap();
    let toggles = Toggles::from_groups(&[ChartGroup::Toss]);
    let config = PresenterConfig::default();

    let text = format_page(&output, &toggles, &config, false).unwrap();
    assert!(text.contains("No. of tosses won by each team"));
    assert!(text.contains("Winning toss implies winning matches?"));
    assert!(!text.contains("Total Runs Across the Seasons\n---"));

    let json = format_page(&output, &toggles, &config, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "IPL Matches Analysis");
    assert_eq!(value["panels"].as_array().unwrap().len(), 1);
    assert_eq!(value["panels"][0]["right"][1]["id"], "toss_win_match_win");
}

//! Interactive command: toggle chart groups from a line-oriented session.
//!
//! Every change re-runs the whole pipeline. Unchanged input files hit the
//! memo caches, so only the page itself is rebuilt.

use std::io::{self, BufRead, Write};

use super::{
    common::{Pipeline, PipelineCaches},
    dashboard::format_page,
    resolve_data_paths,
};
use crate::{
    cli::{
        types::toggles::{ChartGroup, Toggles},
        InputArgs,
    },
    data::DataPaths,
    present::PresenterConfig,
    Result, Season,
};

const HELP: &str = "\
Commands:
  matches | runs | runs-per-match | toss   toggle a chart group
  all | none                              show or hide every group
  show                                    render the page again
  help                                    this message
  quit                                    leave the session";

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle(ChartGroup),
    ShowAll,
    HideAll,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line; `None` for blank lines, `Err` for unknown words.
    pub fn parse(line: &str) -> Option<std::result::Result<Self, String>> {
        let word = line.trim().to_lowercase();
        let cmd = match word.as_str() {
            "" => return None,
            "all" => SessionCommand::ShowAll,
            "none" => SessionCommand::HideAll,
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => match other.parse::<ChartGroup>() {
                Ok(group) => SessionCommand::Toggle(group),
                Err(e) => return Some(Err(e)),
            },
        };
        Some(Ok(cmd))
    }
}

/// Drive a session over arbitrary input/output. Returns the final toggles.
pub fn run_session<R: BufRead, W: Write>(
    pipeline: &Pipeline<'_>,
    paths: &DataPaths,
    config: &PresenterConfig,
    as_json: bool,
    input: R,
    mut out: W,
) -> Result<Toggles> {
    let mut toggles = Toggles::default();

    // Fail up front if the inputs are unusable
    let output = pipeline.run(paths)?;
    writeln!(out, "{}", format_page(&output, &toggles, config, as_json)?)?;
    writeln!(out, "{}", HELP)?;

    for line in input.lines() {
        let command = match SessionCommand::parse(&line?) {
            Some(Ok(command)) => command,
            Some(Err(message)) => {
                writeln!(out, "{} (type 'help')", message)?;
                continue;
            }
            None => continue,
        };

        match command {
            SessionCommand::Toggle(group) => {
                let on = toggles.toggle(group);
                log::info!("{} {}", group, if on { "shown" } else { "hidden" });
            }
            SessionCommand::ShowAll => toggles = Toggles::all(),
            SessionCommand::HideAll => toggles = Toggles::default(),
            SessionCommand::Show => {}
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            SessionCommand::Quit => break,
        }

        let output = pipeline.run(paths)?;
        writeln!(out, "{}", format_page(&output, &toggles, config, as_json)?)?;
    }

    Ok(toggles)
}

/// Handle the interactive command
pub fn handle_interactive(
    inputs: InputArgs,
    as_json: bool,
    highlight_season: Option<Season>,
) -> Result<()> {
    let paths = resolve_data_paths(&inputs);
    let config = PresenterConfig {
        highlight_season,
        ..PresenterConfig::default()
    };

    let caches = PipelineCaches::default();
    let pipeline = Pipeline::new(&caches);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &pipeline,
        &paths,
        &config,
        as_json,
        stdin.lock(),
        stdout.lock(),
    )?;

    for (name, stats) in caches.stats()? {
        log::info!(
            "{} cache: {} hits, {} misses, {}/{} entries",
            name,
            stats.hits,
            stats.misses,
            stats.len,
            stats.capacity
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &TempDir) -> DataPaths {
        fs::write(
            dir.path().join("deliveries.csv"),
            "ID,total_run\n1,4\n1,6\n2,1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("matches.csv"),
            "ID,Date,Season,TossWinner,TossDecision,WinningTeam\n\
             1,2008-04-18,2008,A,bat,A\n\
             2,2009-04-18,2009,B,field,C\n",
        )
        .unwrap();
        DataPaths::in_dir(dir.path())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("   "), None);
        assert_eq!(
            SessionCommand::parse("Toss"),
            Some(Ok(SessionCommand::Toggle(ChartGroup::Toss)))
        );
        assert_eq!(SessionCommand::parse("q"), Some(Ok(SessionCommand::Quit)));
        assert!(matches!(SessionCommand::parse("wickets"), Some(Err(_))));
    }

    #[test]
    fn test_session_toggles_and_reuses_cache() {
        let dir = TempDir::new().unwrap();
        let paths = write_inputs(&dir);
        let caches = PipelineCaches::default();
        let pipeline = Pipeline::new(&caches);

        let input = "matches\ntoss\nbogus\nmatches\nquit\nruns\n";
        let mut out = Vec::new();
        let toggles = run_session(
            &pipeline,
            &paths,
            &PresenterConfig::default(),
            false,
            input.as_bytes(),
            &mut out,
        )
        .unwrap();

        // "runs" comes after quit and is never applied
        assert_eq!(toggles, Toggles::from_groups(&[ChartGroup::Toss]));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[x] Show Toss Analysis"));
        assert!(text.contains("unknown chart group: bogus"));

        // Initial render plus three toggles; everything after the first is a hit
        let stats = caches.season_stats.stats().unwrap();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 3);
    }

    #[test]
    fn test_session_fails_on_missing_input() {
        let dir = TempDir::new().unwrap();
        let caches = PipelineCaches::default();
        let pipeline = Pipeline::new(&caches);

        let result = run_session(
            &pipeline,
            &DataPaths::in_dir(dir.path()),
            &PresenterConfig::default(),
            false,
            "toss\n".as_bytes(),
            Vec::new(),
        );
        assert!(result.is_err());
    }
}

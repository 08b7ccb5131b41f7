//! CSV loading for the deliveries and matches tables.
//!
//! Column names are matched after lowercasing and dropping `_` and spaces, so
//! `TossWinner`, `toss_winner` and `Toss Winner` all resolve to the same column.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::types::{DeliveryRecord, MatchRecord, Tables, TossDecision};
use super::DataPaths;
use crate::cli::types::{ids::MatchId, time::Season};
use crate::error::{Result, StatsError};

#[cfg(test)]
mod tests;

/// A required column: the name reported when missing, plus accepted spellings.
struct Column {
    name: &'static str,
    aliases: &'static [&'static str],
}

const DELIVERY_MATCH_ID: Column = Column {
    name: "ID",
    aliases: &["id", "matchid"],
};
const DELIVERY_RUNS: Column = Column {
    name: "total_runs",
    aliases: &["totalruns", "totalrun"],
};

const MATCH_ID: Column = Column {
    name: "ID",
    aliases: &["id", "matchid"],
};
const MATCH_DATE: Column = Column {
    name: "Date",
    aliases: &["date"],
};
const MATCH_SEASON: Column = Column {
    name: "Season",
    aliases: &["season"],
};
const MATCH_TOSS_WINNER: Column = Column {
    name: "TossWinner",
    aliases: &["tosswinner"],
};
const MATCH_TOSS_DECISION: Column = Column {
    name: "TossDecision",
    aliases: &["tossdecision"],
};
const MATCH_WINNER: Column = Column {
    name: "WinningTeam",
    aliases: &["winningteam", "winner"],
};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Read an input file fully, reporting a missing or unreadable file as `FileAccess`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| StatsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the ball-by-ball deliveries table from a CSV file.
pub fn load_deliveries(path: &Path) -> Result<Vec<DeliveryRecord>> {
    let bytes = read_input(path)?;
    deliveries_from_reader(bytes.as_slice(), path)
}

/// Load the match results table from a CSV file.
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let bytes = read_input(path)?;
    matches_from_reader(bytes.as_slice(), path)
}

/// Load both tables. Either failing aborts the whole load.
pub fn load_tables(paths: &DataPaths) -> Result<Tables> {
    let deliveries = load_deliveries(&paths.deliveries)?;
    let matches = load_matches(&paths.matches)?;
    Ok(Tables::new(deliveries, matches))
}

/// Parse deliveries from any reader. `source` names the input in errors.
pub fn deliveries_from_reader<R: Read>(rdr: R, source: &Path) -> Result<Vec<DeliveryRecord>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let headers = reader.headers()?.clone();

    let id_idx = column_index(&headers, &DELIVERY_MATCH_ID, source)?;
    let runs_idx = column_index(&headers, &DELIVERY_RUNS, source)?;

    let mut deliveries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let id = cell(&record, id_idx);
        let match_id = id
            .parse::<MatchId>()
            .map_err(|_| invalid(source, line, DELIVERY_MATCH_ID.name, id))?;

        let runs = cell(&record, runs_idx);
        let total_runs = runs
            .parse::<u32>()
            .map_err(|_| invalid(source, line, DELIVERY_RUNS.name, runs))?;

        deliveries.push(DeliveryRecord::new(match_id, total_runs));
    }

    log::info!(
        "Loaded {} deliveries from {}",
        deliveries.len(),
        source.display()
    );
    Ok(deliveries)
}

/// Parse match results from any reader. `source` names the input in errors.
pub fn matches_from_reader<R: Read>(rdr: R, source: &Path) -> Result<Vec<MatchRecord>> {
    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let headers = reader.headers()?.clone();

    let id_idx = column_index(&headers, &MATCH_ID, source)?;
    let date_idx = column_index(&headers, &MATCH_DATE, source)?;
    let season_idx = column_index(&headers, &MATCH_SEASON, source)?;
    let toss_winner_idx = column_index(&headers, &MATCH_TOSS_WINNER, source)?;
    let toss_decision_idx = column_index(&headers, &MATCH_TOSS_DECISION, source)?;
    let winner_idx = column_index(&headers, &MATCH_WINNER, source)?;

    let mut matches = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = line_of(&record);

        let id = cell(&record, id_idx);
        let match_id = id
            .parse::<MatchId>()
            .map_err(|_| invalid(source, line, MATCH_ID.name, id))?;

        let raw_date = cell(&record, date_idx);
        let date =
            parse_date(raw_date).ok_or_else(|| invalid(source, line, MATCH_DATE.name, raw_date))?;

        let raw_decision = cell(&record, toss_decision_idx);
        let toss_decision = match optional(raw_decision) {
            Some(d) => Some(
                d.parse::<TossDecision>()
                    .map_err(|_| invalid(source, line, MATCH_TOSS_DECISION.name, d))?,
            ),
            None => None,
        };

        matches.push(MatchRecord {
            id: match_id,
            date,
            season: Season::from_date(date),
            source_season: optional(cell(&record, season_idx)).map(str::to_string),
            toss_winner: optional(cell(&record, toss_winner_idx)).map(str::to_string),
            toss_decision,
            winning_team: optional(cell(&record, winner_idx)).map(str::to_string),
        });
    }

    log::info!("Loaded {} matches from {}", matches.len(), source.display());
    Ok(matches)
}

/// Parse a match date in any of the layouts the published files use.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // Excel exports sometimes carry a midnight time component
    let s = s.split_whitespace().next().unwrap_or(s);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn normalize_header(h: &str) -> String {
    h.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn column_index(headers: &StringRecord, column: &Column, source: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| column.aliases.contains(&normalize_header(h).as_str()))
        .ok_or_else(|| StatsError::MissingColumn {
            path: source.to_path_buf(),
            column: column.name.to_string(),
        })
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

/// Empty cells and `NA` markers mean "no value".
fn optional(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("n/a") {
        None
    } else {
        Some(s)
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn invalid(source: &Path, line: u64, column: &str, value: &str) -> StatsError {
    StatsError::InvalidValue {
        path: PathBuf::from(source),
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

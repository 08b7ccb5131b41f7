//! Per-season aggregation: match counts, run totals and runs per match.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::cli::types::{ids::MatchId, time::Season};
use crate::data::{DeliveryRecord, MatchRecord, Tables};


/// The three derived per-season tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub matches_per_season: BTreeMap<Season, u32>,
    pub runs_per_season: BTreeMap<Season, u64>,
    /// Non-finite for a season with runs but no matches.
    pub runs_per_match: BTreeMap<Season, f64>,
}

impl SeasonStats {
    /// Seasons present in any of the three tables, in order.
    pub fn seasons(&self) -> Vec<Season> {
        let mut seasons: Vec<Season> = self
            .matches_per_season
            .keys()
            .chain(self.runs_per_season.keys())
            .copied()
            .collect();
        seasons.sort();
        seasons.dedup();
        seasons
    }
}

/// Compute all per-season tables for the loaded data.
pub fn season_stats(tables: &Tables) -> SeasonStats {
    let matches_per_season = matches_per_season(&tables.matches);
    let runs_per_season = runs_per_season(&tables.deliveries, &tables.matches);
    let runs_per_match = runs_per_match(&runs_per_season, &matches_per_season);

    SeasonStats {
        matches_per_season,
        runs_per_season,
        runs_per_match,
    }
}

/// Number of matches per season.
pub fn matches_per_season(matches: &[MatchRecord]) -> BTreeMap<Season, u32> {
    let mut counts = BTreeMap::new();
    for m in matches {
        *counts.entry(m.season).or_insert(0) += 1;
    }
    counts
}

/// Total runs per season.
///
/// Every match contributes its season even without deliveries, so a season
/// with matches always appears (possibly with 0 runs). Deliveries whose match
/// id is not in the matches table are dropped. When a match id repeats, its
/// deliveries count toward the last row's season.
pub fn runs_per_season(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
) -> BTreeMap<Season, u64> {
    let mut totals: BTreeMap<Season, u64> = matches.iter().map(|m| (m.season, 0)).collect();

    let mut season_of: HashMap<MatchId, Season> = HashMap::with_capacity(matches.len());
    let mut duplicated = 0usize;
    for m in matches {
        if season_of.insert(m.id, m.season).is_some() {
            duplicated += 1;
        }
    }
    if duplicated > 0 {
        log::debug!("{} match rows repeat an earlier match id", duplicated);
    }

    let mut orphaned = 0usize;

    for d in deliveries {
        match season_of.get(&d.match_id) {
            Some(season) => *totals.entry(*season).or_insert(0) += u64::from(d.total_runs),
            None => orphaned += 1,
        }
    }

    if orphaned > 0 {
        log::debug!(
            "Dropped {} deliveries with no matching match record",
            orphaned
        );
    }
    totals
}

/// Runs per match, joined on the season key.
///
/// A season with runs but no matches divides by zero and yields a non-finite
/// value (`inf`, or `NaN` for zero runs) instead of an error.
pub fn runs_per_match(
    runs: &BTreeMap<Season, u64>,
    matches: &BTreeMap<Season, u32>,
) -> BTreeMap<Season, f64> {
    runs.keys()
        .chain(matches.keys())
        .map(|season| {
            let total = runs.get(season).copied().unwrap_or(0);
            let count = matches.get(season).copied().unwrap_or(0);
            (*season, total as f64 / f64::from(count))
        })
        .collect()
}

//! Toss statistics: who wins tosses, what they choose, and whether it pays off.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::cli::types::time::Season;
use crate::data::{MatchRecord, TossDecision};


/// Toss wins for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCount {
    pub team: String,
    pub count: u32,
}

/// Share of one toss decision across all matches that recorded one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionShare {
    pub decision: TossDecision,
    pub count: u32,
    pub percent: f64,
}

/// Whether winning the toss coincided with winning the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossOutcome {
    pub yes: u32,
    pub no: u32,
}

impl TossOutcome {
    pub fn total(&self) -> u32 {
        self.yes + self.no
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TossAnalysis {
    /// Most toss wins first.
    pub wins_by_team: Vec<TeamCount>,
    /// Most frequent decision first.
    pub decision_shares: Vec<DecisionShare>,
    pub decisions_by_season: BTreeMap<Season, BTreeMap<TossDecision, u32>>,
    pub outcome: TossOutcome,
}

pub fn toss_analysis(matches: &[MatchRecord]) -> TossAnalysis {
    TossAnalysis {
        wins_by_team: toss_wins_by_team(matches),
        decision_shares: toss_decision_shares(matches),
        decisions_by_season: toss_decision_by_season(matches),
        outcome: toss_win_match_win(matches),
    }
}

/// Toss wins per team, ordered by count descending then team name.
/// Matches without a recorded toss winner are skipped.
pub fn toss_wins_by_team(matches: &[MatchRecord]) -> Vec<TeamCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for team in matches.iter().filter_map(|m| m.toss_winner.as_deref()) {
        *counts.entry(team).or_insert(0) += 1;
    }

    let mut wins: Vec<TeamCount> = counts
        .into_iter()
        .map(|(team, count)| TeamCount {
            team: team.to_string(),
            count,
        })
        .collect();
    wins.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.team.cmp(&b.team)));
    wins
}

/// Percentage of each toss decision, ordered by count descending.
pub fn toss_decision_shares(matches: &[MatchRecord]) -> Vec<DecisionShare> {
    let mut counts: BTreeMap<TossDecision, u32> = BTreeMap::new();
    for decision in matches.iter().filter_map(|m| m.toss_decision) {
        *counts.entry(decision).or_insert(0) += 1;
    }

    let total: u32 = counts.values().sum();
    let mut shares: Vec<DecisionShare> = counts
        .into_iter()
        .map(|(decision, count)| DecisionShare {
            decision,
            count,
            percent: f64::from(count) / f64::from(total) * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count).then(a.decision.cmp(&b.decision)));
    shares
}

/// Cross tab of toss decisions per season.
pub fn toss_decision_by_season(
    matches: &[MatchRecord],
) -> BTreeMap<Season, BTreeMap<TossDecision, u32>> {
    let mut table: BTreeMap<Season, BTreeMap<TossDecision, u32>> = BTreeMap::new();
    for m in matches {
        if let Some(decision) = m.toss_decision {
            *table
                .entry(m.season)
                .or_default()
                .entry(decision)
                .or_insert(0) += 1;
        }
    }
    table
}

/// Yes/No counts of "toss winner won the match" over every match.
pub fn toss_win_match_win(matches: &[MatchRecord]) -> TossOutcome {
    let yes = matches.iter().filter(|m| m.toss_winner_won()).count() as u32;
    TossOutcome {
        yes,
        no: matches.len() as u32 - yes,
    }
}

//! Row types for the deliveries and matches tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cli::types::{ids::MatchId, time::Season};

/// What the toss winner chose to do first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

impl fmt::Display for TossDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TossDecision::Bat => "bat",
            TossDecision::Field => "field",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TossDecision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bat" | "batting" => Ok(TossDecision::Bat),
            "field" | "fielding" | "bowl" | "bowling" => Ok(TossDecision::Field),
            other => Err(format!("unknown toss decision: {}", other)),
        }
    }
}

/// A single ball bowled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub match_id: MatchId,
    /// Runs off the ball including extras.
    pub total_runs: u32,
}

impl DeliveryRecord {
    pub fn new(match_id: MatchId, total_runs: u32) -> Self {
        Self {
            match_id,
            total_runs,
        }
    }
}

/// One match result row.
///
/// `season` always comes from `date`; whatever the file's season column said
/// is kept in `source_season` for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub date: NaiveDate,
    pub season: Season,
    pub source_season: Option<String>,
    pub toss_winner: Option<String>,
    pub toss_decision: Option<TossDecision>,
    /// `None` for abandoned games and no-results.
    pub winning_team: Option<String>,
}

impl MatchRecord {
    /// Build a record whose season is derived from `date`.
    pub fn new(id: MatchId, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            season: Season::from_date(date),
            source_season: None,
            toss_winner: None,
            toss_decision: None,
            winning_team: None,
        }
    }

    pub fn with_toss(mut self, winner: impl Into<String>, decision: TossDecision) -> Self {
        self.toss_winner = Some(winner.into());
        self.toss_decision = Some(decision);
        self
    }

    pub fn with_winner(mut self, winner: impl Into<String>) -> Self {
        self.winning_team = Some(winner.into());
        self
    }

    /// Whether the toss winner went on to win. A missing winner on either
    /// side never counts as a match.
    pub fn toss_winner_won(&self) -> bool {
        match (&self.toss_winner, &self.winning_team) {
            (Some(toss), Some(winner)) => toss == winner,
            _ => false,
        }
    }
}

/// The two input tables as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tables {
    pub deliveries: Vec<DeliveryRecord>,
    pub matches: Vec<MatchRecord>,
}

impl Tables {
    pub fn new(deliveries: Vec<DeliveryRecord>, matches: Vec<MatchRecord>) -> Self {
        Self {
            deliveries,
            matches,
        }
    }
}

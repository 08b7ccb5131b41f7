//! ID types for league match data.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for match identifiers.
///
/// Joins between the deliveries and matches tables go through this type,
/// so a run total can never be keyed by some other numeric column by mistake.
///
/// # Examples
///
/// ```rust
/// use ipl_stats::MatchId;
///
/// let id = MatchId::new(1312200);
/// assert_eq!(id.as_u64(), 1312200);
/// assert_eq!(id.to_string(), "1312200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Create a new MatchId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

//! Season type for league competition cycles.

use crate::error::{Result, StatsError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// A season is identified by the calendar year its matches were played in.
/// Ordering follows the year so seasons sort chronologically in maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    /// The season a match played on `date` belongs to.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.year().clamp(0, u16::MAX as i32) as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_date() {
        let date = NaiveDate::from_ymd_opt(2013, 5, 26).unwrap();
        assert_eq!(Season::from_date(date), Season::new(2013));
    }

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = " 2020 ".parse().unwrap();
        assert_eq!(season.as_u16(), 2020);
        assert_eq!(season.to_string(), "2020");
        assert!("2020/21".parse::<Season>().is_err());
    }

    #[test]
    fn test_season_ordering() {
        let mut seasons = vec![Season::new(2010), Season::new(2008), Season::new(2009)];
        seasons.sort();
        assert_eq!(
            seasons,
            vec![Season::new(2008), Season::new(2009), Season::new(2010)]
        );
    }
}

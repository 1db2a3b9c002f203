//! Contest calendar: weeks, trimesters and the current-week calculation.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Number of regular-season weeks in the contest.
pub const SEASON_WEEKS: u8 = 18;

/// Weeks per trimester prize window.
pub const TRIMESTER_WEEKS: u8 = 6;

/// A contest week, always within 1..=18.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(u8);

impl Week {
    pub const FIRST: Week = Week(1);
    pub const LAST: Week = Week(SEASON_WEEKS);

    pub fn new(number: u8) -> Result<Self, ParseError> {
        if (1..=SEASON_WEEKS).contains(&number) {
            Ok(Week(number))
        } else {
            Err(ParseError::WeekOutOfRange(i64::from(number)))
        }
    }

    /// Clamp an arbitrary week number into the season.
    pub fn clamped(number: i64) -> Self {
        Week(number.clamp(1, i64::from(SEASON_WEEKS)) as u8)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn trimester(self) -> Trimester {
        match self.0 {
            1..=6 => Trimester::First,
            7..=12 => Trimester::Second,
            _ => Trimester::Third,
        }
    }

    /// Every week of the season in order.
    pub fn all() -> impl Iterator<Item = Week> {
        (1..=SEASON_WEEKS).map(Week)
    }
}

impl TryFrom<u8> for Week {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Week::new(value)
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> u8 {
        week.0
    }
}

impl FromStr for Week {
    type Err = ParseError;

    /// Accepts `7`, `week7`, `Week 7` and `week_7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("week")
            .unwrap_or(&lower)
            .trim_start_matches(['_', ' ']);
        let number: i64 = digits
            .parse()
            .map_err(|_| ParseError::InvalidWeek(s.to_string()))?;
        u8::try_from(number)
            .map_err(|_| ParseError::WeekOutOfRange(number))
            .and_then(Week::new)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Map a calendar date to the contest week.
///
/// Week 1 starts on `season_start`; every 7 days advance one week. Dates before
/// the start count as week 1 and dates after the season count as week 18.
pub fn current_week(today: NaiveDate, season_start: NaiveDate) -> Week {
    let days = today.signed_duration_since(season_start).num_days();
    Week::clamped(days.div_euclid(7) + 1)
}

/// A six-week sub-season prize window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    pub fn new(number: u8) -> Result<Self, ParseError> {
        match number {
            1 => Ok(Trimester::First),
            2 => Ok(Trimester::Second),
            3 => Ok(Trimester::Third),
            other => Err(ParseError::InvalidTrimester(other)),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    /// Week numbers covered by this trimester.
    pub fn weeks(self) -> RangeInclusive<u8> {
        let start = (self.number() - 1) * TRIMESTER_WEEKS + 1;
        start..=start + TRIMESTER_WEEKS - 1
    }

    pub fn contains(self, week: Week) -> bool {
        self.weeks().contains(&week.number())
    }

    pub fn label(self) -> String {
        let weeks = self.weeks();
        format!(
            "Trimester {} (Weeks {}-{})",
            self.number(),
            weeks.start(),
            weeks.end()
        )
    }
}

#[cfg(test)]
#[path = "week_tests.rs"]
mod week_tests;

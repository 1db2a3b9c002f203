//! Error types shared by the core crate.

use thiserror::Error;

use crate::week::Week;

/// Failure to parse one of the core value types from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("week {0} is outside the season (1-18)")]
    WeekOutOfRange(i64),
    #[error("invalid week `{0}`")]
    InvalidWeek(String),
    #[error("trimester {0} does not exist (expected 1-3)")]
    InvalidTrimester(u8),
    #[error("invalid spread `{0}` (expected a number with at most one decimal)")]
    InvalidSpread(String),
    #[error("invalid point value `{0}` (expected a multiple of 0.5)")]
    InvalidPoints(String),
}

/// Whole-week failures of the scoring engine.
///
/// Per-row problems (empty picks, unknown teams) never surface here; they are
/// scored as zero and reported through the row's outcomes instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no games found for week {week}")]
    NoGames { week: Week },
}

//! Games and outcome resolution.
//!
//! A [`Game`] is one scheduled matchup as it appears on the schedule sheet.
//! [`resolve`] derives the straight-up winner and the against-the-spread
//! winner for every game. Missing scores or a missing spread line resolve to
//! an explicit `Undetermined` state rather than being read as zero.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::team::Team;

/// A point handicap applied to the home team, stored exactly in tenths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Spread(i32);

impl Spread {
    pub const fn from_tenths(tenths: i32) -> Self {
        Spread(tenths)
    }

    pub const fn tenths(self) -> i32 {
        self.0
    }
}

impl FromStr for Spread {
    type Err = ParseError;

    /// Parses `-3.5`, `+7`, `3.0`. Anything finer than a tenth is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSpread(s.to_string());
        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let frac = frac.trim_end_matches('0');
        if frac.len() > 1 {
            return Err(invalid());
        }
        let whole: i32 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let tenth: i32 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| invalid())?
        };
        let tenths = whole
            .checked_mul(10)
            .and_then(|t| t.checked_add(tenth))
            .ok_or_else(invalid)?;
        Ok(Spread(if negative { -tenths } else { tenths }))
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        f.pad(&format!("{}{}.{}", sign, abs / 10, abs % 10))
    }
}

impl Serialize for Spread {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct SpreadVisitor;

impl Visitor<'_> for SpreadVisitor {
    type Value = Spread;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a point spread such as -3.5")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Spread, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Spread, E> {
        // Shortest decimal form of the float.
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Spread, E> {
        v.to_string().parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Spread, E> {
        v.to_string().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Spread {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SpreadVisitor)
    }
}

/// One scheduled matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Raw week number from the schedule (not validated, playoff rows may exist).
    pub week: u8,
    pub home_team: Team,
    pub away_team: Team,
    /// Final scores; `None` until the game is over.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// `None` until the line is released.
    pub home_spread: Option<Spread>,
}

impl Game {
    pub fn new(week: u8, home_team: Team, away_team: Team) -> Self {
        Self {
            week,
            home_team,
            away_team,
            home_score: None,
            away_score: None,
            home_spread: None,
        }
    }

    /// Builder helper: set the final score.
    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_score = Some(home);
        self.away_score = Some(away);
        self
    }

    /// Builder helper: set the home spread.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.home_spread = Some(spread);
        self
    }

    pub fn is_final(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team.as_str() == team || self.away_team.as_str() == team
    }
}

/// Straight-up result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameWinner {
    Team(Team),
    Tie,
    /// Scores not final yet.
    Undetermined,
}

/// Against-the-spread result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpreadWinner {
    Team(Team),
    Push,
    /// Scores not final, or the spread line was never set.
    Undetermined,
}

impl fmt::Display for GameWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameWinner::Team(team) => write!(f, "{team}"),
            GameWinner::Tie => f.write_str("Tie"),
            GameWinner::Undetermined => Ok(()),
        }
    }
}

impl fmt::Display for SpreadWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpreadWinner::Team(team) => write!(f, "{team}"),
            SpreadWinner::Push => f.write_str("Push"),
            SpreadWinner::Undetermined => Ok(()),
        }
    }
}

/// A game with both derived outcomes attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGame {
    pub game: Game,
    pub game_winner: GameWinner,
    pub spread_winner: SpreadWinner,
}

impl ResolvedGame {
    pub fn is_undetermined(&self) -> bool {
        self.game_winner == GameWinner::Undetermined
            || self.spread_winner == SpreadWinner::Undetermined
    }
}

/// Resolve a single game.
pub fn resolve_game(game: &Game) -> ResolvedGame {
    let (game_winner, spread_winner) = match (game.home_score, game.away_score) {
        (Some(home), Some(away)) => {
            let game_winner = match home.cmp(&away) {
                Ordering::Equal => GameWinner::Tie,
                Ordering::Greater => GameWinner::Team(game.home_team.clone()),
                Ordering::Less => GameWinner::Team(game.away_team.clone()),
            };
            let spread_winner = match game.home_spread {
                Some(spread) => {
                    let adjusted_home = i64::from(home) * 10 + i64::from(spread.tenths());
                    match adjusted_home.cmp(&(i64::from(away) * 10)) {
                        Ordering::Equal => SpreadWinner::Push,
                        Ordering::Greater => SpreadWinner::Team(game.home_team.clone()),
                        Ordering::Less => SpreadWinner::Team(game.away_team.clone()),
                    }
                }
                None => SpreadWinner::Undetermined,
            };
            (game_winner, spread_winner)
        }
        _ => (GameWinner::Undetermined, SpreadWinner::Undetermined),
    };

    ResolvedGame {
        game: game.clone(),
        game_winner,
        spread_winner,
    }
}

/// Resolve every game. Rows are independent and keep their input order.
pub fn resolve(games: &[Game]) -> Vec<ResolvedGame> {
    games.iter().map(resolve_game).collect()
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

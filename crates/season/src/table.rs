//! CSV tables: weekly picks, the season schedule and scored weeks
//!
//! Column names are the sheet headers the league has always used. Cells are
//! trimmed on read; empty cells mean "no value".

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use pickem_core::{Game, PickSlot, PlayerWeeklyPicks, Points, ScoredWeek, Spread, Team};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {path}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("failed to write scored rows")]
    Write(#[from] csv::Error),
}

/// Column order of a scored week artifact.
pub const SCORED_COLUMNS: [&str; 16] = [
    "Player",
    "Survivor Pick",
    "2 Point Spread",
    "1 Point Spread (1)",
    "1 Point Spread (2)",
    "1 Point Spread (3)",
    "1 Point Spread (4)",
    "Survivor Point",
    "2 Point Spread Points",
    "1 Point Spread (1) Points",
    "1 Point Spread (2) Points",
    "1 Point Spread (3) Points",
    "1 Point Spread (4) Points",
    "Total Points",
    "Special",
    "Week",
];

/// Columns that must be present in the schedule file.
const GAME_COLUMNS: [&str; 3] = ["Week", "Home Team", "Away Team"];

fn open(path: &Path) -> Result<File, TableError> {
    File::open(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_err(path: &Path) -> impl Fn(csv::Error) -> TableError + '_ {
    move |source| TableError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn require_columns(
    headers: &csv::StringRecord,
    columns: &[&'static str],
    path: &Path,
) -> Result<(), TableError> {
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(TableError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Picks
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawPicksRow {
    #[serde(rename = "Player")]
    player: Option<String>,
    #[serde(rename = "Survivor Pick", default)]
    survivor_pick: Option<String>,
    #[serde(rename = "2 Point Spread", default)]
    two_point: Option<String>,
    #[serde(rename = "1 Point Spread (1)", default)]
    one_point_1: Option<String>,
    #[serde(rename = "1 Point Spread (2)", default)]
    one_point_2: Option<String>,
    #[serde(rename = "1 Point Spread (3)", default)]
    one_point_3: Option<String>,
    #[serde(rename = "1 Point Spread (4)", default)]
    one_point_4: Option<String>,
}

impl RawPicksRow {
    fn into_picks(self) -> Option<PlayerWeeklyPicks> {
        let player = self.player.filter(|p| !p.trim().is_empty())?;
        Some(PlayerWeeklyPicks {
            player,
            survivor_pick: Team::parse_opt(self.survivor_pick.as_deref()),
            spread_picks: [
                Team::parse_opt(self.two_point.as_deref()),
                Team::parse_opt(self.one_point_1.as_deref()),
                Team::parse_opt(self.one_point_2.as_deref()),
                Team::parse_opt(self.one_point_3.as_deref()),
                Team::parse_opt(self.one_point_4.as_deref()),
            ],
        })
    }
}

/// Parse a weekly picks sheet. Missing pick columns, and trailing cells a
/// short row leaves out, read as empty picks; rows without a player name are
/// skipped.
pub fn read_picks_from<R: Read>(reader: R, source: &Path) -> Result<Vec<PlayerWeeklyPicks>, TableError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_err(source))?.clone();
    require_columns(&headers, &["Player"], source)?;

    let mut picks = Vec::new();
    for (i, row) in reader.deserialize::<RawPicksRow>().enumerate() {
        let row = row.map_err(csv_err(source))?;
        match row.into_picks() {
            Some(p) => picks.push(p),
            None => warn!(path = %source.display(), line = i + 2, "skipping picks row without a player"),
        }
    }
    Ok(picks)
}

pub fn read_picks(path: &Path) -> Result<Vec<PlayerWeeklyPicks>, TableError> {
    read_picks_from(open(path)?, path)
}

// =============================================================================
// Schedule
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawGameRow {
    #[serde(rename = "Week")]
    week: Option<String>,
    #[serde(rename = "Home Team")]
    home_team: Option<String>,
    #[serde(rename = "Away Team")]
    away_team: Option<String>,
    #[serde(rename = "Home Score", default)]
    home_score: Option<String>,
    #[serde(rename = "Away Score", default)]
    away_score: Option<String>,
    #[serde(rename = "Home Spread", default)]
    home_spread: Option<String>,
}

/// Whole number cell; spreadsheet exports sometimes write `27.0`.
fn parse_whole(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let value: f64 = raw.parse().ok()?;
    (value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)).then_some(value as u32)
}

fn blank(cell: &Option<String>) -> bool {
    cell.as_deref().is_none_or(|c| c.trim().is_empty())
}

impl RawGameRow {
    /// Build the game for one schedule row. An unreadable score or spread
    /// cell is logged and left empty so the game stays undetermined; only a
    /// row that cannot be placed in a week is dropped.
    fn into_game(self, source: &Path, line: usize) -> Option<Game> {
        let (Some(home), Some(away)) = (
            Team::parse_opt(self.home_team.as_deref()),
            Team::parse_opt(self.away_team.as_deref()),
        ) else {
            warn!(path = %source.display(), line, "skipping schedule row without both teams");
            return None;
        };

        let week_cell = self.week.unwrap_or_default();
        let Some(week) = parse_whole(&week_cell).and_then(|w| u8::try_from(w).ok()) else {
            warn!(path = %source.display(), line, week = %week_cell, "skipping schedule row with an invalid week");
            return None;
        };

        let score = |cell: &Option<String>, column: &str| -> Option<u32> {
            let raw = cell.as_deref().map(str::trim).filter(|c| !c.is_empty())?;
            let parsed = parse_whole(raw);
            if parsed.is_none() {
                warn!(path = %source.display(), line, week, column, cell = raw, "unreadable score, game left pending");
            }
            parsed
        };
        let home_score = score(&self.home_score, "Home Score");
        let away_score = score(&self.away_score, "Away Score");

        let home_spread = if blank(&self.home_spread) {
            None
        } else {
            let raw = self.home_spread.unwrap_or_default();
            match raw.parse::<Spread>() {
                Ok(spread) => Some(spread),
                Err(e) => {
                    warn!(path = %source.display(), line, week, error = %e, "spread treated as not released");
                    None
                }
            }
        };

        let mut game = Game::new(week, home, away);
        // A half-entered score is treated as not final.
        if let (Some(h), Some(a)) = (home_score, away_score) {
            game = game.with_score(h, a);
        }
        game.home_spread = home_spread;
        Some(game)
    }
}

/// Parse the season schedule. Rows missing a team or a readable week are
/// skipped; bad score or spread cells leave that game undetermined.
pub fn read_games_from<R: Read>(reader: R, source: &Path) -> Result<Vec<Game>, TableError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_err(source))?.clone();
    require_columns(&headers, &GAME_COLUMNS, source)?;

    let mut games = Vec::new();
    for (i, row) in reader.deserialize::<RawGameRow>().enumerate() {
        let row = row.map_err(csv_err(source))?;
        games.extend(row.into_game(source, i + 2));
    }
    Ok(games)
}

pub fn read_games(path: &Path) -> Result<Vec<Game>, TableError> {
    read_games_from(open(path)?, path)
}

// =============================================================================
// Scored weeks
// =============================================================================

/// One row of a persisted scored week, exactly as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Survivor Pick")]
    pub survivor_pick: Option<String>,
    #[serde(rename = "2 Point Spread")]
    pub two_point_spread: Option<String>,
    #[serde(rename = "1 Point Spread (1)")]
    pub one_point_spread_1: Option<String>,
    #[serde(rename = "1 Point Spread (2)")]
    pub one_point_spread_2: Option<String>,
    #[serde(rename = "1 Point Spread (3)")]
    pub one_point_spread_3: Option<String>,
    #[serde(rename = "1 Point Spread (4)")]
    pub one_point_spread_4: Option<String>,
    #[serde(rename = "Survivor Point")]
    pub survivor_point: u8,
    #[serde(rename = "2 Point Spread Points")]
    pub two_point_spread_points: Points,
    #[serde(rename = "1 Point Spread (1) Points")]
    pub one_point_spread_1_points: Points,
    #[serde(rename = "1 Point Spread (2) Points")]
    pub one_point_spread_2_points: Points,
    #[serde(rename = "1 Point Spread (3) Points")]
    pub one_point_spread_3_points: Points,
    #[serde(rename = "1 Point Spread (4) Points")]
    pub one_point_spread_4_points: Points,
    #[serde(rename = "Total Points")]
    pub total_points: Points,
    #[serde(rename = "Special")]
    pub special: u8,
    #[serde(rename = "Week")]
    pub week: u8,
}

impl From<&ScoredWeek> for ScoredRow {
    fn from(scored: &ScoredWeek) -> Self {
        let pick = |slot: PickSlot| scored.picks.pick(slot).map(|t| t.as_str().to_string());
        let points = |slot: PickSlot| scored.slot(slot).points;
        Self {
            player: scored.picks.player.clone(),
            survivor_pick: scored.picks.survivor_pick.as_ref().map(|t| t.as_str().to_string()),
            two_point_spread: pick(PickSlot::TwoPoint),
            one_point_spread_1: pick(PickSlot::OnePoint1),
            one_point_spread_2: pick(PickSlot::OnePoint2),
            one_point_spread_3: pick(PickSlot::OnePoint3),
            one_point_spread_4: pick(PickSlot::OnePoint4),
            survivor_point: scored.survivor_point,
            two_point_spread_points: points(PickSlot::TwoPoint),
            one_point_spread_1_points: points(PickSlot::OnePoint1),
            one_point_spread_2_points: points(PickSlot::OnePoint2),
            one_point_spread_3_points: points(PickSlot::OnePoint3),
            one_point_spread_4_points: points(PickSlot::OnePoint4),
            total_points: scored.total_points,
            special: u8::from(scored.special),
            week: scored.week.number(),
        }
    }
}

impl ScoredRow {
    pub fn pick(&self, slot: PickSlot) -> Option<&str> {
        let cell = match slot {
            PickSlot::TwoPoint => &self.two_point_spread,
            PickSlot::OnePoint1 => &self.one_point_spread_1,
            PickSlot::OnePoint2 => &self.one_point_spread_2,
            PickSlot::OnePoint3 => &self.one_point_spread_3,
            PickSlot::OnePoint4 => &self.one_point_spread_4,
        };
        cell.as_deref()
    }

    pub fn slot_points(&self, slot: PickSlot) -> Points {
        match slot {
            PickSlot::TwoPoint => self.two_point_spread_points,
            PickSlot::OnePoint1 => self.one_point_spread_1_points,
            PickSlot::OnePoint2 => self.one_point_spread_2_points,
            PickSlot::OnePoint3 => self.one_point_spread_3_points,
            PickSlot::OnePoint4 => self.one_point_spread_4_points,
        }
    }

    /// Sum of the five slot points before the survivor gate.
    pub fn spread_points(&self) -> Points {
        PickSlot::ALL.iter().map(|s| self.slot_points(*s)).sum()
    }

    pub fn survived(&self) -> bool {
        self.survivor_point == 1
    }

    pub fn is_special(&self) -> bool {
        self.special == 1
    }
}

/// Write scored rows in artifact column order, header first.
pub fn write_scored<W: Write>(writer: W, rows: &[ScoredWeek]) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(SCORED_COLUMNS)?;
    for row in rows {
        writer.serialize(ScoredRow::from(row))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn read_scored_from<R: Read>(reader: R, source: &Path) -> Result<Vec<ScoredRow>, TableError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    reader
        .deserialize::<ScoredRow>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_err(source))
}

pub fn read_scored(path: &Path) -> Result<Vec<ScoredRow>, TableError> {
    read_scored_from(open(path)?, path)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

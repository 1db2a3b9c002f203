//! Season configuration (`pickem.toml`)
//!
//! Every field has a default, so a missing file or a partial file both work.

use chrono::NaiveDate;
use pickem_core::Week;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("prize split must total 100% (overall {overall} + 3 x trimester {trimester} + special {special})")]
    PrizeSplit {
        overall: u8,
        trimester: u8,
        special: u8,
    },
}

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    /// Contest name shown in report headers
    pub name: String,
    /// First day of week 1
    pub season_start: NaiveDate,
    pub data: DataConfig,
    pub output: OutputConfig,
    /// League teams, used for the remaining-survivor-teams report
    pub teams: Vec<String>,
    pub prizes: PrizeConfig,
}

/// Where the raw inputs live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `week_<n>_picks.csv`
    pub picks_dir: PathBuf,
    /// Season schedule with scores and spreads, all weeks in one file
    pub games_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory holding the write-once `week_<n>_scores.csv` artifacts
    pub weekly_scores_folder: PathBuf,
}

/// Prize pool settings. Percentages are whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrizeConfig {
    /// Buy-in per player in dollars
    pub buy_in: u32,
    /// Number of paying players; counted from the scored weeks when unset
    pub players: Option<u32>,
    pub overall_pct: u8,
    /// Share of each of the three trimesters
    pub trimester_pct: u8,
    pub special_pct: u8,
}

pub const NFL_TEAMS: [&str; 32] = [
    "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN", "DET", "GB", "HOU",
    "IND", "JAX", "KC", "LAC", "LAR", "LV", "MIA", "MIN", "NE", "NO", "NYG", "NYJ", "PHI", "PIT",
    "SEA", "SF", "TB", "TEN", "WAS",
];

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            name: "DDD Trifecta 2025".to_string(),
            season_start: NaiveDate::from_ymd_opt(2025, 9, 4).unwrap_or_default(),
            data: DataConfig::default(),
            output: OutputConfig::default(),
            teams: NFL_TEAMS.iter().map(|t| t.to_string()).collect(),
            prizes: PrizeConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            picks_dir: PathBuf::from("data/picks"),
            games_file: PathBuf::from("data/games.csv"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            weekly_scores_folder: PathBuf::from("data/weekly_scores"),
        }
    }
}

impl Default for PrizeConfig {
    fn default() -> Self {
        Self {
            buy_in: 100,
            players: None,
            overall_pct: 75,
            trimester_pct: 5,
            special_pct: 10,
        }
    }
}

impl PrizeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let total = u32::from(self.overall_pct)
            + 3 * u32::from(self.trimester_pct)
            + u32::from(self.special_pct);
        if total == 100 {
            Ok(())
        } else {
            Err(ConfigError::PrizeSplit {
                overall: self.overall_pct,
                trimester: self.trimester_pct,
                special: self.special_pct,
            })
        }
    }
}

impl SeasonConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: SeasonConfig = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.prizes.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn picks_path(&self, week: Week) -> PathBuf {
        self.data
            .picks_dir
            .join(format!("week_{}_picks.csv", week.number()))
    }
}

//! Write-once storage of scored weeks
//!
//! Each scored week lives in `week_<n>_scores.csv` under the output folder.
//! Once a file exists it is never replaced: rows are written to a temporary
//! file in the same directory and linked into place only if the target name
//! is still free.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pickem_core::{ScoredWeek, Week};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::table::{self, ScoredRow, TableError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("week {week} has already been scored ({path})")]
    AlreadyScored { week: Week, path: PathBuf },
    #[error("storage error in {path}")]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Folder of scored week artifacts.
#[derive(Debug, Clone)]
pub struct WeeklyStore {
    dir: PathBuf,
}

impl WeeklyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, week: Week) -> PathBuf {
        self.dir.join(file_name(week))
    }

    pub fn contains(&self, week: Week) -> bool {
        self.path_for(week).exists()
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.dir.clone(),
            source,
        }
    }

    /// Persist one scored week. Fails with [`StoreError::AlreadyScored`]
    /// if the week's artifact exists, leaving it byte-for-byte untouched.
    pub fn write_once(&self, week: Week, rows: &[ScoredWeek]) -> Result<PathBuf, StoreError> {
        let path = self.path_for(week);
        if path.exists() {
            return Err(StoreError::AlreadyScored { week, path });
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| self.io_err(e))?;
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| self.io_err(e))?;
        table::write_scored(&mut tmp, rows)?;
        tmp.flush().map_err(|e| self.io_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_err(e))?;

        tmp.persist_noclobber(&path).map_err(|e| {
            if e.error.kind() == io::ErrorKind::AlreadyExists {
                StoreError::AlreadyScored {
                    week,
                    path: path.clone(),
                }
            } else {
                self.io_err(e.error)
            }
        })?;

        info!(week = %week, rows = rows.len(), path = %path.display(), "wrote scored week");
        Ok(path)
    }

    /// Rows of one scored week, or `None` if it has not been scored.
    pub fn load_week(&self, week: Week) -> Result<Option<Vec<ScoredRow>>, StoreError> {
        let path = self.path_for(week);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(table::read_scored(&path)?))
    }

    /// Weeks that have an artifact, ascending.
    pub fn scored_weeks(&self) -> Result<Vec<Week>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_err(e)),
        };

        let mut weeks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.io_err(e))?;
            let name = entry.file_name();
            match name.to_str().and_then(parse_file_name) {
                Some(week) => weeks.push(week),
                None => debug!(file = ?name, "ignoring non-artifact file"),
            }
        }
        weeks.sort();
        Ok(weeks)
    }

    /// Every stored row, in week order.
    pub fn load_all(&self) -> Result<Vec<ScoredRow>, StoreError> {
        let mut rows = Vec::new();
        for week in self.scored_weeks()? {
            rows.extend(table::read_scored(&self.path_for(week))?);
        }
        Ok(rows)
    }
}

fn file_name(week: Week) -> String {
    format!("week_{}_scores.csv", week.number())
}

fn parse_file_name(name: &str) -> Option<Week> {
    let number = name.strip_prefix("week_")?.strip_suffix("_scores.csv")?;
    Week::new(number.parse().ok()?).ok()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;

//! Season runner: load a week's inputs, score it and persist the result

use std::path::PathBuf;

use pickem_core::{
    resolve, score_week, score_weeks, Game, PickSlot, PlayerWeeklyPicks, ScoredWeek,
    ScoringError, SlotOutcome, SurvivorOutcome, Week, WeekInput,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SeasonConfig;
use crate::store::{StoreError, WeeklyStore};
use crate::table::{self, TableError};

/// Errors from the score and backfill commands.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("no picks file for week {week} at {path}")]
    PicksMissing { week: Week, path: PathBuf },
    #[error("picks file for week {week} has no players ({path})")]
    NoPlayers { week: Week, path: PathBuf },
    #[error("week {week} still has unsettled picks: {}", players.join(", "))]
    Unsettled { week: Week, players: Vec<String> },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// A week that was scored and written.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub week: Week,
    pub path: PathBuf,
    pub rows: Vec<ScoredWeek>,
}

impl ScoreReport {
    /// Generate a text report of the week's outcomes
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Week {} scored ===\n", self.week));
        report.push_str(&format!("Written to {}\n\n", self.path.display()));
        report.push_str(&format!(
            "{:<24} {:<9} {:<11} {:<11} {:<11} {:<11} {:<11} {:>6}\n",
            "Player", "Survivor", "2pt", "1pt (1)", "1pt (2)", "1pt (3)", "1pt (4)", "Total"
        ));
        report.push_str(&"-".repeat(100));
        report.push('\n');

        for row in &self.rows {
            let slots: Vec<String> = PickSlot::ALL
                .iter()
                .map(|s| row.slot(*s).outcome.to_string())
                .collect();
            report.push_str(&format!(
                "{:<24} {:<9} {:<11} {:<11} {:<11} {:<11} {:<11} {:>6}{}\n",
                row.player(),
                row.survivor.as_str(),
                slots[0],
                slots[1],
                slots[2],
                slots[3],
                slots[4],
                row.total_points,
                if row.special { "  *special*" } else { "" }
            ));
        }
        report
    }

    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Runs scoring for the configured season
pub struct SeasonRunner {
    config: SeasonConfig,
    store: WeeklyStore,
}

impl SeasonRunner {
    pub fn new(config: SeasonConfig) -> Self {
        let store = WeeklyStore::new(config.output.weekly_scores_folder.clone());
        Self { config, store }
    }

    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    pub fn store(&self) -> &WeeklyStore {
        &self.store
    }

    fn load_input(&self, week: Week, schedule: &[Game]) -> Result<WeekInput, RunnerError> {
        let path = self.config.picks_path(week);
        if !path.exists() {
            return Err(RunnerError::PicksMissing { week, path });
        }
        let picks = table::read_picks(&path)?;
        if picks.is_empty() {
            return Err(RunnerError::NoPlayers { week, path });
        }
        let games = schedule
            .iter()
            .filter(|g| g.week == week.number())
            .cloned()
            .collect();
        Ok(WeekInput { week, picks, games })
    }

    pub fn load_schedule(&self) -> Result<Vec<Game>, RunnerError> {
        Ok(table::read_games(&self.config.data.games_file)?)
    }

    /// A week's raw picks, or `None` before its picks file exists.
    pub fn load_picks(&self, week: Week) -> Result<Option<Vec<PlayerWeeklyPicks>>, RunnerError> {
        let path = self.config.picks_path(week);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(table::read_picks(&path)?))
    }

    /// Score one week and write its artifact.
    ///
    /// Refuses up front if the week already has an artifact, and refuses to
    /// write if any pick still depends on a game without a final result.
    pub fn score_week(&self, week: Week) -> Result<ScoreReport, RunnerError> {
        if self.store.contains(week) {
            return Err(StoreError::AlreadyScored {
                week,
                path: self.store.path_for(week),
            }
            .into());
        }

        let schedule = self.load_schedule()?;
        let input = self.load_input(week, &schedule)?;
        let resolved = resolve(&input.games);
        let rows = score_week(&input.picks, &resolved, week)?;
        self.persist(week, rows)
    }

    /// Score every week that has a picks file but no artifact yet.
    ///
    /// Weeks are scored in parallel; each one succeeds or fails on its own.
    pub fn backfill(&self) -> Result<Vec<(Week, Result<ScoreReport, RunnerError>)>, RunnerError> {
        let schedule = self.load_schedule()?;

        let mut inputs = Vec::new();
        let mut results = Vec::new();
        for week in Week::all() {
            if self.store.contains(week) || !self.config.picks_path(week).exists() {
                continue;
            }
            match self.load_input(week, &schedule) {
                Ok(input) => inputs.push(input),
                Err(e) => results.push((week, Err(e))),
            }
        }

        for (week, scored) in score_weeks(&inputs) {
            let outcome = scored
                .map_err(RunnerError::from)
                .and_then(|rows| self.persist(week, rows));
            results.push((week, outcome));
        }
        results.sort_by_key(|(week, _)| *week);

        info!(
            weeks = results.len(),
            written = results.iter().filter(|(_, r)| r.is_ok()).count(),
            "backfill finished"
        );
        Ok(results)
    }

    fn persist(&self, week: Week, rows: Vec<ScoredWeek>) -> Result<ScoreReport, RunnerError> {
        check_settled(week, &rows)?;
        let path = self.store.write_once(week, &rows)?;
        Ok(ScoreReport { week, path, rows })
    }
}

/// Fail if any row depends on a game that has no final result.
pub fn check_settled(week: Week, rows: &[ScoredWeek]) -> Result<(), RunnerError> {
    let mut players = Vec::new();
    for row in rows.iter().filter(|r| r.has_unsettled_pick()) {
        let pending = row.survivor == SurvivorOutcome::Pending;
        let unresolved = row
            .slots
            .iter()
            .filter(|s| s.outcome == SlotOutcome::Unresolved)
            .count();
        warn!(week = %week, player = row.player(), pending, unresolved, "pick depends on an unfinished game");
        players.push(row.player().to_string());
    }

    if players.is_empty() {
        Ok(())
    } else {
        Err(RunnerError::Unsettled { week, players })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;

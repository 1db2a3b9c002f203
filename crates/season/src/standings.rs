//! Season and trimester standings built from stored weeks

use std::collections::BTreeMap;

use pickem_core::{PickSlot, Points, Trimester, Week};
use serde::Serialize;

use crate::table::ScoredRow;

/// One line of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position; players tied on points still get distinct ranks
    pub rank: usize,
    pub player: String,
    pub points: Points,
    pub survivor_hits: u32,
    pub specials: u32,
    pub weeks_played: u32,
}

/// Sum each player's totals over the selected weeks and rank them.
///
/// Sorted by points descending, then by name ignoring case.
pub fn standings(rows: &[ScoredRow], window: Option<Trimester>) -> Vec<Standing> {
    let mut by_player: BTreeMap<&str, Standing> = BTreeMap::new();
    let in_window = |row: &&ScoredRow| window.is_none_or(|t| t.weeks().contains(&row.week));

    for row in rows.iter().filter(in_window) {
        let entry = by_player.entry(row.player.as_str()).or_insert_with(|| Standing {
            rank: 0,
            player: row.player.clone(),
            points: Points::ZERO,
            survivor_hits: 0,
            specials: 0,
            weeks_played: 0,
        });
        entry.points += row.total_points;
        entry.survivor_hits += u32::from(row.survived());
        entry.specials += u32::from(row.is_special());
        entry.weeks_played += 1;
    }

    let mut table: Vec<Standing> = by_player.into_values().collect();
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.to_lowercase().cmp(&b.player.to_lowercase()))
    });
    for (i, standing) in table.iter_mut().enumerate() {
        standing.rank = i + 1;
    }
    table
}

pub fn season_standings(rows: &[ScoredRow]) -> Vec<Standing> {
    standings(rows, None)
}

pub fn trimester_standings(rows: &[ScoredRow], trimester: Trimester) -> Vec<Standing> {
    standings(rows, Some(trimester))
}

/// Generate a text leaderboard
pub fn generate_report(title: &str, table: &[Standing]) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== {} ===\n", title));
    report.push_str(&format!(
        "{:>4}  {:<30} {:>8} {:>9} {:>8} {:>6}\n",
        "Rank", "Player", "Points", "Survivor", "Special", "Weeks"
    ));
    report.push_str(&"-".repeat(70));
    report.push('\n');
    for s in table {
        report.push_str(&format!(
            "{:>4}  {:<30} {:>8} {:>9} {:>8} {:>6}\n",
            s.rank, s.player, s.points, s.survivor_hits, s.specials, s.weeks_played
        ));
    }
    if table.is_empty() {
        report.push_str("No scored weeks yet.\n");
    }
    report
}

/// One stored week, best total first. A week without an artifact is
/// reported as not available rather than as zero.
pub fn week_report(week: Week, rows: Option<&[ScoredRow]>) -> String {
    let Some(rows) = rows else {
        return format!("Scores for week {} are not yet available.\n", week);
    };

    let mut sorted: Vec<&ScoredRow> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player.to_lowercase().cmp(&b.player.to_lowercase()))
    });

    let mut report = format!("=== Week {} ===\n", week);
    report.push_str(&format!(
        "{:<24} {:<8} {:>3}  {:<10} {:<10} {:<10} {:<10} {:<10} {:>6} {:>8}\n",
        "Player", "Survivor", "Pt", "2pt", "1pt (1)", "1pt (2)", "1pt (3)", "1pt (4)", "Total", "Special"
    ));
    report.push_str(&"-".repeat(110));
    report.push('\n');
    for row in sorted {
        let cells: Vec<String> = PickSlot::ALL
            .iter()
            .map(|s| format!("{} {}", row.pick(*s).unwrap_or("-"), row.slot_points(*s)))
            .collect();
        report.push_str(&format!(
            "{:<24} {:<8} {:>3}  {:<10} {:<10} {:<10} {:<10} {:<10} {:>6} {:>8}\n",
            row.player,
            row.survivor_pick.as_deref().unwrap_or("-"),
            row.survivor_point,
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            row.total_points,
            if row.is_special() { "yes" } else { "" }
        ));
    }
    report
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;

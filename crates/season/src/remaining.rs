//! Survivor teams a player has used and the ones still available

use std::collections::HashSet;

use serde::Serialize;

use crate::table::ScoredRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivorHistory {
    pub player: String,
    /// `(week, team)` of every first use, in week order
    pub used: Vec<(u8, String)>,
    /// League teams not used yet, in league order
    pub remaining: Vec<String>,
    pub league_size: usize,
}

/// Build a player's survivor history. `None` if the player has no stored weeks.
///
/// Team codes are trimmed and upper-cased before comparison, on both sides.
pub fn survivor_history(rows: &[ScoredRow], player: &str, league: &[String]) -> Option<SurvivorHistory> {
    let mut weeks: Vec<&ScoredRow> = rows.iter().filter(|r| r.player == player).collect();
    if weeks.is_empty() {
        return None;
    }
    weeks.sort_by_key(|r| r.week);

    let mut seen = HashSet::new();
    let mut used = Vec::new();
    for row in weeks {
        let Some(team) = row.survivor_pick.as_deref().map(|t| t.trim().to_uppercase()) else {
            continue;
        };
        if !team.is_empty() && seen.insert(team.clone()) {
            used.push((row.week, team));
        }
    }

    let remaining = league
        .iter()
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !seen.contains(t))
        .collect();

    Some(SurvivorHistory {
        player: player.to_string(),
        used,
        remaining,
        league_size: league.len(),
    })
}

impl SurvivorHistory {
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Survivor teams: {} ===\n\n", self.player));
        report.push_str(&format!("{:>4}  {:<6}\n", "Week", "Team"));
        report.push_str(&"-".repeat(12));
        report.push('\n');
        for (week, team) in &self.used {
            report.push_str(&format!("{:>4}  {:<6}\n", week, team));
        }
        if self.used.is_empty() {
            report.push_str("No survivor picks recorded yet.\n");
        }
        report.push_str(&format!(
            "\nRemaining ({} of {}): {}\n",
            self.remaining.len(),
            self.league_size,
            self.remaining.join(" ")
        ));
        report
    }
}

//! Pick distribution for one week's raw picks

use std::collections::HashMap;

use pickem_core::{PlayerWeeklyPicks, Team, Week};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickCount {
    pub team: String,
    pub picks: u32,
    /// Share of all picks in the table, rounded to one decimal
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBreakdown {
    pub week: Week,
    pub players: usize,
    pub survivor: Vec<PickCount>,
    /// All five spread slots pooled together
    pub spread: Vec<PickCount>,
}

fn tally<'a>(teams: impl Iterator<Item = &'a Team>) -> Vec<PickCount> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for team in teams {
        *counts.entry(team.normalized()).or_default() += 1;
    }
    let total: u32 = counts.values().sum();

    let mut table: Vec<PickCount> = counts
        .into_iter()
        .map(|(team, picks)| PickCount {
            team,
            picks,
            percent: (f64::from(picks) / f64::from(total) * 1000.0).round() / 10.0,
        })
        .collect();
    table.sort_by(|a, b| b.picks.cmp(&a.picks).then_with(|| a.team.cmp(&b.team)));
    table
}

/// Count survivor and spread picks per team.
pub fn breakdown(week: Week, picks: &[PlayerWeeklyPicks]) -> WeekBreakdown {
    WeekBreakdown {
        week,
        players: picks.len(),
        survivor: tally(picks.iter().filter_map(|p| p.survivor_pick.as_ref())),
        spread: tally(picks.iter().flat_map(|p| p.spread_picks.iter().flatten())),
    }
}

fn push_table(report: &mut String, title: &str, table: &[PickCount]) {
    report.push_str(&format!("{}\n", title));
    report.push_str(&format!("{:<6} {:>6} {:>7}\n", "Team", "Picks", "%"));
    report.push_str(&"-".repeat(21));
    report.push('\n');
    for c in table {
        report.push_str(&format!("{:<6} {:>6} {:>6.1}%\n", c.team, c.picks, c.percent));
    }
    if table.is_empty() {
        report.push_str("No picks available for this week.\n");
    }
}

impl WeekBreakdown {
    pub fn generate_report(&self) -> String {
        let mut report = format!("=== Week {} breakdown ({} players) ===\n\n", self.week, self.players);
        push_table(&mut report, "Survivor picks", &self.survivor);
        report.push('\n');
        push_table(&mut report, "Spread picks", &self.spread);
        report
    }
}

/// Breakdown view for a week; a week without a picks file is reported as
/// not available.
pub fn breakdown_report(week: Week, view: Option<&WeekBreakdown>) -> String {
    match view {
        Some(view) => view.generate_report(),
        None => format!("Picks for week {} are not yet available.\n", week),
    }
}

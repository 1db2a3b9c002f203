//! A week's matchups and spread lines from the schedule

use pickem_core::{Game, Spread, Week};
use serde::Serialize;

pub const SPREADS_NOT_RELEASED: &str = "Spreads Not Released";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub away_team: String,
    pub home_team: String,
    pub home_spread: Option<Spread>,
    /// `AWAY +3.5 | HOME -3.5`, or [`SPREADS_NOT_RELEASED`]
    pub line: String,
}

/// Positive lines carry an explicit `+`.
fn signed(tenths: i32) -> String {
    let spread = Spread::from_tenths(tenths);
    if tenths > 0 {
        format!("+{spread}")
    } else {
        spread.to_string()
    }
}

fn spread_line(game: &Game) -> String {
    match game.home_spread {
        Some(spread) => format!(
            "{} {} | {} {}",
            game.away_team,
            signed(-spread.tenths()),
            game.home_team,
            signed(spread.tenths())
        ),
        None => SPREADS_NOT_RELEASED.to_string(),
    }
}

/// The week's games in schedule order.
pub fn matchups(week: Week, schedule: &[Game]) -> Vec<Matchup> {
    schedule
        .iter()
        .filter(|g| g.week == week.number())
        .map(|g| Matchup {
            away_team: g.away_team.to_string(),
            home_team: g.home_team.to_string(),
            home_spread: g.home_spread,
            line: spread_line(g),
        })
        .collect()
}

pub fn matchups_report(week: Week, games: &[Matchup]) -> String {
    let mut report = format!("=== Week {} matchups ===\n", week);
    report.push_str(&format!("{:<6} {:<6} {}\n", "Away", "Home", "Spread"));
    report.push_str(&"-".repeat(40));
    report.push('\n');
    for m in games {
        report.push_str(&format!("{:<6} {:<6} {}\n", m.away_team, m.home_team, m.line));
    }
    if games.is_empty() {
        report.push_str("No games scheduled for this week.\n");
    }
    report
}

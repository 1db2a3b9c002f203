//! Per-player season summary

use std::collections::BTreeMap;

use pickem_core::{PickSlot, Points, SEASON_WEEKS, SLOT_COUNT};
use serde::Serialize;

use crate::table::ScoredRow;

/// Cells that mean "no pick" in hand-edited sheets.
const EMPTY_TOKENS: [&str; 6] = ["", "nan", "none", "null", "-", "n/a"];

/// The survivor-losing week that cost the most spread points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Letdown {
    pub team: Option<String>,
    pub week: u8,
    pub points_missed: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player: String,
    pub weeks_scored: usize,
    pub survivor_hits: u32,
    /// Percent of the full season's survivor picks
    pub survivor_hit_rate: f64,
    pub biggest_letdown: Option<Letdown>,
    /// Spread points before the survivor gate
    pub total_possible: Points,
    pub final_score: Points,
    /// `final_score / total_possible` as a percent; absent before any spread point
    pub ats_conversion: Option<f64>,
    /// Correct spread picks, a push counting as half
    pub ats_correct: f64,
    pub ats_hit_rate: f64,
    pub two_point_success: f64,
    /// Most picked spread teams with their count, ties included
    pub most_picked: Vec<(String, u32)>,
    pub weeks: Vec<ScoredRow>,
}

fn percent(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator != 0.0).then(|| numerator / denominator * 100.0)
}

fn normalize_pick(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if EMPTY_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Summarize one player's stored weeks. `None` if the player has none.
pub fn summarize(rows: &[ScoredRow], player: &str) -> Option<PlayerSummary> {
    let mut weeks: Vec<ScoredRow> = rows.iter().filter(|r| r.player == player).cloned().collect();
    if weeks.is_empty() {
        return None;
    }
    weeks.sort_by_key(|r| r.week);

    let season_weeks = f64::from(SEASON_WEEKS);
    let survivor_hits: u32 = weeks.iter().map(|r| u32::from(r.survivor_point)).sum();

    // Earliest week wins a tie on points missed.
    let mut biggest_letdown: Option<Letdown> = None;
    for row in weeks.iter().filter(|r| !r.survived()) {
        let missed = row.spread_points();
        if biggest_letdown.as_ref().is_none_or(|l| missed > l.points_missed) {
            biggest_letdown = Some(Letdown {
                team: row.survivor_pick.clone(),
                week: row.week,
                points_missed: missed,
            });
        }
    }

    let total_possible: Points = weeks.iter().map(ScoredRow::spread_points).sum();
    let final_score: Points = weeks.iter().map(|r| r.total_points).sum();

    let two_point: Points = weeks.iter().map(|r| r.slot_points(PickSlot::TwoPoint)).sum();
    let one_point: Points = weeks
        .iter()
        .flat_map(|r| PickSlot::ALL.into_iter().skip(1).map(move |s| r.slot_points(s)))
        .sum();
    let ats_correct = two_point.as_f64() / 2.0 + one_point.as_f64();

    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for row in &weeks {
        for team in PickSlot::ALL.iter().filter_map(|s| row.pick(*s)).filter_map(normalize_pick) {
            *counts.entry(team).or_default() += 1;
        }
    }
    let max = counts.values().copied().max().unwrap_or(0);
    let most_picked = counts.into_iter().filter(|(_, n)| *n == max).collect();

    Some(PlayerSummary {
        player: player.to_string(),
        weeks_scored: weeks.len(),
        survivor_hits,
        survivor_hit_rate: f64::from(survivor_hits) / season_weeks * 100.0,
        biggest_letdown,
        total_possible,
        final_score,
        ats_conversion: percent(final_score.as_f64(), total_possible.as_f64()),
        ats_correct,
        ats_hit_rate: ats_correct / (season_weeks * SLOT_COUNT as f64) * 100.0,
        two_point_success: two_point.as_f64() / (season_weeks * 2.0) * 100.0,
        most_picked,
        weeks,
    })
}

/// Trim a float for display: `3.0` -> `3`, `2.5` -> `2.5`.
fn fmt_num(x: f64) -> String {
    let s = format!("{:.1}", x);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn fmt_pct(x: Option<f64>) -> String {
    x.map_or_else(|| "n/a".to_string(), |v| format!("{:.1}%", v))
}

impl PlayerSummary {
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Summary: {} ===\n\n", self.player));

        report.push_str("Survivor\n");
        report.push_str(&format!("  Correct picks:    {}\n", self.survivor_hits));
        report.push_str(&format!("  Hit rate:         {}\n", fmt_pct(Some(self.survivor_hit_rate))));
        match &self.biggest_letdown {
            Some(l) => report.push_str(&format!(
                "  Biggest letdown:  {} - Week {} ({} points missed)\n",
                l.team.as_deref().unwrap_or("no pick"),
                l.week,
                l.points_missed
            )),
            None => report.push_str("  Biggest letdown:  none\n"),
        }

        report.push_str("\nATS\n");
        report.push_str(&format!("  Correct picks:    {}\n", fmt_num(self.ats_correct)));
        report.push_str(&format!("  Hit rate:         {}\n", fmt_pct(Some(self.ats_hit_rate))));

        report.push_str("\nScoring\n");
        report.push_str(&format!("  Final score:      {}\n", self.final_score));
        report.push_str(&format!("  Total possible:   {}\n", self.total_possible));
        report.push_str(&format!("  ATS conversion:   {}\n", fmt_pct(self.ats_conversion)));
        report.push_str(&format!("  2 point success:  {}\n", fmt_pct(Some(self.two_point_success))));
        let most: Vec<String> = self
            .most_picked
            .iter()
            .map(|(team, n)| format!("{team} ({n} times)"))
            .collect();
        report.push_str(&format!(
            "  Most picked ATS:  {}\n\n",
            if most.is_empty() { "none".to_string() } else { most.join(", ") }
        ));

        report.push_str(&format!(
            "{:>4}  {:<8} {:>3}  {:<12} {:<12} {:<12} {:<12} {:<12} {:>6}\n",
            "Week", "Survivor", "Pt", "2pt", "1pt (1)", "1pt (2)", "1pt (3)", "1pt (4)", "Total"
        ));
        report.push_str(&"-".repeat(92));
        report.push('\n');
        for row in &self.weeks {
            let cells: Vec<String> = PickSlot::ALL
                .iter()
                .map(|s| format!("{} {}", row.pick(*s).unwrap_or("-"), row.slot_points(*s)))
                .collect();
            report.push_str(&format!(
                "{:>4}  {:<8} {:>3}  {:<12} {:<12} {:<12} {:<12} {:<12} {:>6}\n",
                row.week,
                row.survivor_pick.as_deref().unwrap_or("-"),
                row.survivor_point,
                cells[0],
                cells[1],
                cells[2],
                cells[3],
                cells[4],
                row.total_points
            ));
        }
        report
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;

//! Prize pool split and special-condition earners

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::PrizeConfig;
use crate::table::ScoredRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeBucket {
    pub label: String,
    pub percent: u8,
    /// Dollars
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeTable {
    pub players: u32,
    pub buy_in: u32,
    pub pot: u32,
    pub buckets: Vec<PrizeBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SpecialEarner {
    pub week: u8,
    pub player: String,
}

/// Split the pot into the season, trimester and special buckets.
pub fn prize_table(config: &PrizeConfig, players: u32) -> PrizeTable {
    let pot = players * config.buy_in;
    let bucket = |label: &str, percent: u8| PrizeBucket {
        label: label.to_string(),
        percent,
        amount: f64::from(pot) * f64::from(percent) / 100.0,
    };

    PrizeTable {
        players,
        buy_in: config.buy_in,
        pot,
        buckets: vec![
            bucket("Season Overall (Top 3)", config.overall_pct),
            bucket("Trimester 1 (Weeks 1-6)", config.trimester_pct),
            bucket("Trimester 2 (Weeks 7-12)", config.trimester_pct),
            bucket("Trimester 3 (Weeks 13-18)", config.trimester_pct),
            bucket("Special", config.special_pct),
        ],
    }
}

/// Distinct players across the stored weeks.
pub fn count_players(rows: &[ScoredRow]) -> u32 {
    let players: BTreeSet<&str> = rows.iter().map(|r| r.player.as_str()).collect();
    players.len() as u32
}

/// Every week a player hit the special condition, by week then player.
pub fn special_earners(rows: &[ScoredRow]) -> Vec<SpecialEarner> {
    let mut earners: Vec<SpecialEarner> = rows
        .iter()
        .filter(|r| r.is_special())
        .map(|r| SpecialEarner {
            week: r.week,
            player: r.player.clone(),
        })
        .collect();
    earners.sort();
    earners
}

impl PrizeTable {
    pub fn generate_report(&self, earners: &[SpecialEarner]) -> String {
        let mut report = String::new();
        report.push_str("=== Prizes ===\n\n");
        report.push_str(&format!("Players: {}\n", self.players));
        report.push_str(&format!("Buy-in:  ${}\n", self.buy_in));
        report.push_str(&format!("Pot:     ${}\n\n", self.pot));

        report.push_str(&format!("{:<30} {:>8} {:>10}\n", "Bucket", "Percent", "Amount"));
        report.push_str(&"-".repeat(50));
        report.push('\n');
        for b in &self.buckets {
            report.push_str(&format!(
                "{:<30} {:>7}% {:>10}\n",
                b.label,
                b.percent,
                format!("${:.0}", b.amount)
            ));
        }

        report.push_str("\nSpecial condition earners\n");
        if earners.is_empty() {
            report.push_str("  none yet\n");
        }
        for e in earners {
            report.push_str(&format!("  Week {:>2}  {}\n", e.week, e.player));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::blank_row;

    #[test]
    fn test_default_split_for_28_players() {
        let table = prize_table(&PrizeConfig::default(), 28);
        assert_eq!(table.pot, 2800);
        let amounts: Vec<f64> = table.buckets.iter().map(|b| b.amount).collect();
        assert_eq!(amounts, vec![2100.0, 140.0, 140.0, 140.0, 280.0]);
        let total: f64 = amounts.iter().sum();
        assert_eq!(total, 2800.0);
    }

    #[test]
    fn test_special_earners_sorted() {
        let mut rows = vec![blank_row("zoe", 5), blank_row("amy", 5), blank_row("bo", 2), blank_row("cy", 2)];
        rows[0].special = 1;
        rows[1].special = 1;
        rows[2].special = 1;
        let earners = special_earners(&rows);
        let flat: Vec<(u8, &str)> = earners.iter().map(|e| (e.week, e.player.as_str())).collect();
        assert_eq!(flat, vec![(2, "bo"), (5, "amy"), (5, "zoe")]);
        assert_eq!(count_players(&rows), 4);

        let report = prize_table(&PrizeConfig::default(), 4).generate_report(&earners);
        assert!(report.contains("Week  5  zoe"));
        assert!(report.contains("$300"));
    }
}

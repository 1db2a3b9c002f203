//! Fixtures shared by the unit tests.

use pickem_core::Points;

use crate::table::ScoredRow;

/// A scored row with no picks and zero points.
pub fn blank_row(player: &str, week: u8) -> ScoredRow {
    ScoredRow {
        player: player.to_string(),
        survivor_pick: None,
        two_point_spread: None,
        one_point_spread_1: None,
        one_point_spread_2: None,
        one_point_spread_3: None,
        one_point_spread_4: None,
        survivor_point: 0,
        two_point_spread_points: Points::ZERO,
        one_point_spread_1_points: Points::ZERO,
        one_point_spread_2_points: Points::ZERO,
        one_point_spread_3_points: Points::ZERO,
        one_point_spread_4_points: Points::ZERO,
        total_points: Points::ZERO,
        special: 0,
        week,
    }
}

pub fn opt(team: &str) -> Option<String> {
    Some(team.to_string())
}

pub fn points(value: f64) -> Points {
    Points::try_from(value).expect("half-point value")
}

//! End-to-end weekly scoring scenarios
//!
//! Each test resolves a small slate of games and scores one or two players,
//! checking the survivor gate, pushes, ties and the special flag together.

use pickem_core::{
    resolve, score_week, Game, PickSlot, PlayerWeeklyPicks, Points, SlotOutcome, Spread,
    SurvivorOutcome, Team, Week,
};

fn team(code: &str) -> Team {
    Team::parse(code).unwrap()
}

fn final_game(week: u8, home: &str, away: &str, score: (u32, u32), spread: &str) -> Game {
    Game::new(week, team(home), team(away))
        .with_score(score.0, score.1)
        .with_spread(spread.parse::<Spread>().unwrap())
}

fn row(player: &str, survivor: &str, spreads: [&str; 5]) -> PlayerWeeklyPicks {
    PickSlot::ALL
        .into_iter()
        .zip(spreads)
        .fold(PlayerWeeklyPicks::new(player).with_survivor(survivor), |row, (slot, t)| {
            row.with_pick(slot, t)
        })
}

fn week4() -> Week {
    Week::new(4).unwrap()
}

fn week4_games() -> Vec<Game> {
    vec![
        final_game(4, "LAR", "IND", (27, 20), "-3.5"), // LAR win + cover
        final_game(4, "HOU", "TEN", (26, 0), "-6.5"),  // HOU win + cover
        final_game(4, "ATL", "WAS", (34, 27), "2.5"),  // ATL win + cover
        final_game(4, "PIT", "MIN", (24, 21), "-3"),   // PIT win, push
        final_game(4, "NO", "BUF", (19, 31), "16.5"),  // BUF win, NO cover
        final_game(4, "ARI", "SEA", (20, 23), "-1.5"), // SEA win + cover
        final_game(4, "MIA", "NYJ", (27, 27), "-2.5"), // tie, NYJ cover
    ]
}

// =============================================================================
// Scenario A: survivor wins, every spread pick covers
// =============================================================================

#[test]
fn test_perfect_week_scores_six_without_special() {
    let games = resolve(&week4_games());
    let picks = vec![row("alpha", "LAR", ["HOU", "ATL", "NO", "SEA", "LAR"])];
    let scored = score_week(&picks, &games, week4()).unwrap();

    assert_eq!(scored[0].survivor_point, 1);
    assert_eq!(scored[0].total_points, Points::whole(6));
    assert!(!scored[0].special);
}

// =============================================================================
// Scenario B: survivor loses, ungated spread points are exactly 6
// =============================================================================

#[test]
fn test_lost_survivor_with_six_spread_points_is_special() {
    let games = resolve(&week4_games());
    let picks = vec![row("bravo", "IND", ["HOU", "ATL", "NO", "SEA", "LAR"])];
    let scored = score_week(&picks, &games, week4()).unwrap();

    let slot_points: Vec<Points> = PickSlot::ALL.iter().map(|s| scored[0].slot(*s).points).collect();
    assert_eq!(
        slot_points,
        vec![
            Points::whole(2),
            Points::ONE,
            Points::ONE,
            Points::ONE,
            Points::ONE
        ]
    );
    assert_eq!(scored[0].survivor_point, 0);
    assert_eq!(scored[0].total_points, Points::ZERO);
    assert!(scored[0].special);
}

// =============================================================================
// Scenario C: survivor scoring uses the straight-up winner only
// =============================================================================

#[test]
fn test_survivor_win_on_spread_push_still_counts() {
    let games = resolve(&week4_games());
    let picks = vec![row("charlie", "PIT", ["PIT", "", "", "", ""])];
    let scored = score_week(&picks, &games, week4()).unwrap();

    assert_eq!(scored[0].survivor, SurvivorOutcome::Win);
    assert_eq!(scored[0].slot(PickSlot::TwoPoint).outcome, SlotOutcome::Push);
    assert_eq!(scored[0].total_points, Points::ONE);
}

#[test]
fn test_survivor_pick_on_tied_game_fails() {
    let games = resolve(&week4_games());
    let picks = vec![
        row("delta", "MIA", ["NYJ", "", "", "", ""]),
        row("echo", "NYJ", ["NYJ", "", "", "", ""]),
    ];
    let scored = score_week(&picks, &games, week4()).unwrap();

    for s in &scored {
        assert_eq!(s.survivor, SurvivorOutcome::Loss);
        assert_eq!(s.survivor_point, 0);
        assert_eq!(s.slot(PickSlot::TwoPoint).points, Points::whole(2));
        assert_eq!(s.total_points, Points::ZERO);
    }
}

// =============================================================================
// Scenario D: both sides of a push earn half a point
// =============================================================================

#[test]
fn test_push_home_and_away_both_half() {
    let games = resolve(&week4_games());
    let picks = vec![
        row("foxtrot", "HOU", ["", "PIT", "", "", ""]),
        row("golf", "HOU", ["", "", "", "MIN", ""]),
    ];
    let scored = score_week(&picks, &games, week4()).unwrap();

    assert_eq!(scored[0].slot(PickSlot::OnePoint1).points, Points::HALF);
    assert_eq!(scored[1].slot(PickSlot::OnePoint3).points, Points::HALF);
    assert_eq!(scored[0].total_points, Points::HALF);
    assert_eq!(scored[1].total_points, Points::HALF);
}

// =============================================================================
// Scenario E: an empty 1-point slot is a no_pick worth nothing
// =============================================================================

#[test]
fn test_empty_slot_scores_zero_in_total_and_special_sum() {
    let games = resolve(&week4_games());
    let picks = vec![
        row("hotel", "LAR", ["HOU", "ATL", "", "SEA", "LAR"]),
        row("india", "IND", ["HOU", "ATL", "", "SEA", "LAR"]),
    ];
    let scored = score_week(&picks, &games, week4()).unwrap();

    assert_eq!(scored[0].slot(PickSlot::OnePoint2).outcome, SlotOutcome::NoPick);
    assert_eq!(scored[0].total_points, Points::whole(5));
    assert_eq!(scored[1].ungated_points(), Points::whole(5));
    assert!(!scored[1].special);
}

// =============================================================================
// Mixed schedule input
// =============================================================================

#[test]
fn test_other_weeks_in_schedule_are_ignored() {
    let mut games = week4_games();
    // Week 5 rematch where IND wins; must not leak into week 4 scoring
    games.push(final_game(5, "IND", "LAR", (30, 10), "-1"));
    let resolved = resolve(&games);

    let picks = vec![row("juliet", "IND", ["IND", "", "", "", ""])];
    let scored = score_week(&picks, &resolved, week4()).unwrap();
    assert_eq!(scored[0].survivor, SurvivorOutcome::Loss);
    assert_eq!(scored[0].slot(PickSlot::TwoPoint).outcome, SlotOutcome::Loss);
}

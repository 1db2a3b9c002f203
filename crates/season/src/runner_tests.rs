use super::*;
use pickem_core::Points;
use std::path::Path;
use tempfile::TempDir;

const PICKS_HEADER: &str = "Player,Survivor Pick,2 Point Spread,1 Point Spread (1),1 Point Spread (2),1 Point Spread (3),1 Point Spread (4)";

fn week(n: u8) -> Week {
    Week::new(n).unwrap()
}

fn setup(games: &str) -> (TempDir, SeasonRunner) {
    let dir = TempDir::new().unwrap();
    let mut config = SeasonConfig::default();
    config.data.picks_dir = dir.path().join("picks");
    config.data.games_file = dir.path().join("games.csv");
    config.output.weekly_scores_folder = dir.path().join("scores");
    std::fs::create_dir_all(&config.data.picks_dir).unwrap();
    std::fs::write(
        &config.data.games_file,
        format!("Week,Home Team,Away Team,Home Score,Away Score,Home Spread\n{games}"),
    )
    .unwrap();
    (dir, SeasonRunner::new(config))
}

fn write_picks(dir: &Path, week_number: u8, rows: &str) {
    std::fs::write(
        dir.join("picks").join(format!("week_{week_number}_picks.csv")),
        format!("{PICKS_HEADER}\n{rows}"),
    )
    .unwrap();
}

#[test]
fn test_score_week_writes_artifact() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n1,PHI,DAL,24,17,-7\n");
    write_picks(dir.path(), 1, "Alice,KC,KC,PHI,,,\nBob,BAL,KC,,,,\n");

    let report = runner.score_week(week(1)).unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].total_points, Points::from_halves(5));
    assert_eq!(report.rows[1].total_points, Points::ZERO);
    assert!(report.path.ends_with("week_1_scores.csv"));
    assert!(runner.store().contains(week(1)));
    assert!(report.generate_report().contains("Alice"));
}

#[test]
fn test_score_week_refuses_existing_artifact_before_reading_inputs() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n");
    write_picks(dir.path(), 1, "Alice,KC,KC,,,,\n");
    runner.score_week(week(1)).unwrap();

    // Picks file gone: the duplicate check still wins
    std::fs::remove_file(dir.path().join("picks").join("week_1_picks.csv")).unwrap();
    let err = runner.score_week(week(1)).unwrap_err();
    assert!(matches!(err, RunnerError::Store(StoreError::AlreadyScored { .. })));
}

#[test]
fn test_missing_inputs_are_refused() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n");

    let err = runner.score_week(week(1)).unwrap_err();
    assert!(matches!(err, RunnerError::PicksMissing { .. }));

    write_picks(dir.path(), 2, "Alice,KC,KC,,,,\n");
    let err = runner.score_week(week(2)).unwrap_err();
    assert!(matches!(err, RunnerError::Scoring(ScoringError::NoGames { .. })));

    write_picks(dir.path(), 1, "");
    let err = runner.score_week(week(1)).unwrap_err();
    assert!(matches!(err, RunnerError::NoPlayers { .. }));
    assert!(!runner.store().contains(week(1)));
}

#[test]
fn test_unsettled_week_is_not_written() {
    let (dir, runner) = setup("3,KC,BAL,,,-3.5\n3,PHI,DAL,24,17,\n3,SF,SEA,13,20,-2.5\n");
    write_picks(dir.path(), 3, "Alice,SF,SEA,,,,\nBob,KC,SEA,,,,\nCara,SEA,PHI,,,,\n");

    let err = runner.score_week(week(3)).unwrap_err();
    match err {
        RunnerError::Unsettled { players, .. } => assert_eq!(players, vec!["Bob", "Cara"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!runner.store().contains(week(3)));
}

#[test]
fn test_backfill_scores_each_pending_week() {
    let (dir, runner) = setup(
        "1,KC,BAL,27,20,-3.5\n2,KC,BUF,10,20,-3\n4,KC,DEN,20,10,-3\n",
    );
    write_picks(dir.path(), 1, "Alice,KC,KC,,,,\n");
    write_picks(dir.path(), 2, "Alice,BUF,BUF,,,,\n");
    write_picks(dir.path(), 3, "Alice,KC,KC,,,,\n");
    runner.score_week(week(1)).unwrap();

    let results = runner.backfill().unwrap();
    let weeks: Vec<u8> = results.iter().map(|(w, _)| w.number()).collect();
    assert_eq!(weeks, vec![2, 3]);
    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(RunnerError::Scoring(_))));

    assert!(runner.store().contains(week(2)));
    assert!(!runner.store().contains(week(3)));
    // No picks file, so week 4 is not attempted
    assert!(!runner.store().contains(week(4)));
}

#[test]
fn test_short_picks_row_scores_missing_slots_as_no_pick() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n1,PHI,DAL,24,17,-7\n");
    // Bob's row stops after the 2 point pick
    write_picks(dir.path(), 1, "Alice,KC,KC,PHI,,,\nBob,KC,KC\n");

    let report = runner.score_week(week(1)).unwrap();
    assert_eq!(report.rows.len(), 2);
    let bob = &report.rows[1];
    assert_eq!(bob.player(), "Bob");
    assert_eq!(bob.slot(PickSlot::TwoPoint).points, Points::whole(2));
    for slot in PickSlot::ALL.into_iter().skip(1) {
        assert_eq!(bob.slot(slot).outcome, SlotOutcome::NoPick);
    }
    assert_eq!(report.rows[0].total_points, Points::from_halves(5));
    assert!(runner.store().contains(week(1)));
}

#[test]
fn test_malformed_future_schedule_row_does_not_block_earlier_week() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n12,SF,SEA,TBD,,PK\n");
    write_picks(dir.path(), 1, "Alice,KC,KC,,,,\n");

    let report = runner.score_week(week(1)).unwrap();
    assert_eq!(report.rows[0].total_points, Points::whole(3));

    let schedule = runner.load_schedule().unwrap();
    let week_12 = schedule.iter().find(|g| g.week == 12).unwrap();
    assert!(!week_12.is_final());
    assert_eq!(week_12.home_spread, None);
}

#[test]
fn test_load_picks_before_file_exists() {
    let (dir, runner) = setup("1,KC,BAL,27,20,-3.5\n");
    assert!(runner.load_picks(week(3)).unwrap().is_none());

    write_picks(dir.path(), 3, "Alice,KC,KC,,,,\n");
    assert_eq!(runner.load_picks(week(3)).unwrap().unwrap().len(), 1);
}

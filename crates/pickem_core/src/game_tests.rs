use super::*;

fn team(code: &str) -> Team {
    Team::parse(code).unwrap()
}

fn spread(s: &str) -> Spread {
    s.parse().unwrap()
}

// =============================================================================
// Spread parsing
// =============================================================================

#[test]
fn test_spread_parse_forms() {
    assert_eq!(spread("-3.5").tenths(), -35);
    assert_eq!(spread("+7").tenths(), 70);
    assert_eq!(spread("3.0").tenths(), 30);
    assert_eq!(spread("-0.5").tenths(), -5);
    assert_eq!(spread(" 2.50 ").tenths(), 25);
    assert_eq!(spread(".5").tenths(), 5);
}

#[test]
fn test_spread_parse_rejects_garbage() {
    assert!("".parse::<Spread>().is_err());
    assert!("-".parse::<Spread>().is_err());
    assert!("3.25".parse::<Spread>().is_err());
    assert!("PK".parse::<Spread>().is_err());
    assert!("1e3".parse::<Spread>().is_err());
}

#[test]
fn test_spread_display() {
    assert_eq!(Spread::from_tenths(-35).to_string(), "-3.5");
    assert_eq!(Spread::from_tenths(70).to_string(), "7.0");
    assert_eq!(Spread::from_tenths(-5).to_string(), "-0.5");
}

// =============================================================================
// Game winner
// =============================================================================

#[test]
fn test_home_win() {
    let game = Game::new(1, team("KC"), team("BAL")).with_score(27, 20);
    assert_eq!(resolve_game(&game).game_winner, GameWinner::Team(team("KC")));
}

#[test]
fn test_away_win() {
    let game = Game::new(1, team("KC"), team("BAL")).with_score(17, 20);
    assert_eq!(resolve_game(&game).game_winner, GameWinner::Team(team("BAL")));
}

#[test]
fn test_tie() {
    let game = Game::new(1, team("KC"), team("BAL"))
        .with_score(20, 20)
        .with_spread(spread("-3"));
    let resolved = resolve_game(&game);
    assert_eq!(resolved.game_winner, GameWinner::Tie);
    // -3 on a tie means the home side failed to cover
    assert_eq!(resolved.spread_winner, SpreadWinner::Team(team("BAL")));
}

#[test]
fn test_unplayed_game_is_undetermined() {
    let game = Game::new(1, team("KC"), team("BAL")).with_spread(spread("-3.5"));
    let resolved = resolve_game(&game);
    assert_eq!(resolved.game_winner, GameWinner::Undetermined);
    assert_eq!(resolved.spread_winner, SpreadWinner::Undetermined);
    assert!(resolved.is_undetermined());
}

// =============================================================================
// Spread winner
// =============================================================================

#[test]
fn test_favorite_covers() {
    // KC -3.5 wins by 7: 27 - 3.5 = 23.5 > 20
    let game = Game::new(1, team("KC"), team("BAL"))
        .with_score(27, 20)
        .with_spread(spread("-3.5"));
    assert_eq!(resolve_game(&game).spread_winner, SpreadWinner::Team(team("KC")));
}

#[test]
fn test_favorite_wins_but_fails_to_cover() {
    // KC -7.5 wins by 7: 27 - 7.5 = 19.5 < 20
    let game = Game::new(1, team("KC"), team("BAL"))
        .with_score(27, 20)
        .with_spread(spread("-7.5"));
    let resolved = resolve_game(&game);
    assert_eq!(resolved.game_winner, GameWinner::Team(team("KC")));
    assert_eq!(resolved.spread_winner, SpreadWinner::Team(team("BAL")));
}

#[test]
fn test_underdog_covers_with_positive_spread() {
    // Home dog +6 loses by 3: 17 + 6 = 23 > 20
    let game = Game::new(1, team("NYJ"), team("BUF"))
        .with_score(17, 20)
        .with_spread(spread("6"));
    assert_eq!(resolve_game(&game).spread_winner, SpreadWinner::Team(team("NYJ")));
}

#[test]
fn test_push() {
    let game = Game::new(1, team("KC"), team("BAL"))
        .with_score(27, 20)
        .with_spread(spread("-7"));
    assert_eq!(resolve_game(&game).spread_winner, SpreadWinner::Push);
}

#[test]
fn test_missing_spread_is_not_treated_as_zero() {
    // With a zero spread this would be a home cover; without a line it must stay open.
    let game = Game::new(1, team("KC"), team("BAL")).with_score(27, 20);
    let resolved = resolve_game(&game);
    assert_eq!(resolved.game_winner, GameWinner::Team(team("KC")));
    assert_eq!(resolved.spread_winner, SpreadWinner::Undetermined);
}

#[test]
fn test_resolve_keeps_order() {
    let games = vec![
        Game::new(2, team("A"), team("B")).with_score(1, 0).with_spread(spread("0")),
        Game::new(2, team("C"), team("D")).with_score(0, 1).with_spread(spread("0")),
    ];
    let resolved = resolve(&games);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].game_winner, GameWinner::Team(team("A")));
    assert_eq!(resolved[1].game_winner, GameWinner::Team(team("D")));
}

#[test]
fn test_winner_display() {
    assert_eq!(GameWinner::Tie.to_string(), "Tie");
    assert_eq!(SpreadWinner::Push.to_string(), "Push");
    assert_eq!(SpreadWinner::Undetermined.to_string(), "");
    assert_eq!(GameWinner::Team(team("SF")).to_string(), "SF");
}

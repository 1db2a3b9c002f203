//! Weekly scoring engine.
//!
//! Scoring a week takes three steps per player:
//!
//! 1. The survivor pick scores 1 if that team won its game outright, else 0.
//! 2. Every spread slot is scored on its own: a cover is worth 1, a push 0.5,
//!    anything else 0, multiplied by the slot weight.
//! 3. The survivor point gates the week: `total = survivor_point * sum(slots)`.
//!
//! Slot points are always computed and kept on the row, even when the gate
//! zeroes the total, because the breakdown views show them. A player whose
//! survivor pick failed but whose ungated spread points add up to exactly
//! [`SPECIAL_THRESHOLD`] earns the special flag.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ScoringError;
use crate::game::{Game, GameWinner, ResolvedGame, SpreadWinner, resolve};
use crate::picks::{PickSlot, PlayerWeeklyPicks, SLOT_COUNT};
use crate::points::Points;
use crate::team::Team;
use crate::week::Week;

/// Ungated spread total that earns the special flag when the survivor pick fails.
pub const SPECIAL_THRESHOLD: Points = Points::whole(6);

/// How a survivor pick fared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivorOutcome {
    Win,
    /// Lost or tied.
    Loss,
    /// The picked team has no game this week.
    NoGame,
    NoPick,
    /// The picked team's game has no final score yet.
    Pending,
}

impl SurvivorOutcome {
    pub fn point(self) -> u8 {
        match self {
            SurvivorOutcome::Win => 1,
            _ => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SurvivorOutcome::Win => "win",
            SurvivorOutcome::Loss => "loss",
            SurvivorOutcome::NoGame => "no_game",
            SurvivorOutcome::NoPick => "no_pick",
            SurvivorOutcome::Pending => "pending",
        }
    }
}

impl fmt::Display for SurvivorOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How a single spread pick fared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotOutcome {
    Win,
    Loss,
    Push,
    NoGame,
    NoPick,
    /// The game's spread result is undetermined (no line, or no final score).
    Unresolved,
}

impl SlotOutcome {
    /// Unweighted value of the outcome.
    pub fn base(self) -> Points {
        match self {
            SlotOutcome::Win => Points::ONE,
            SlotOutcome::Push => Points::HALF,
            _ => Points::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotOutcome::Win => "win",
            SlotOutcome::Loss => "loss",
            SlotOutcome::Push => "push",
            SlotOutcome::NoGame => "no_game",
            SlotOutcome::NoPick => "no_pick",
            SlotOutcome::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for SlotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome and weighted points of one spread slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotScore {
    pub outcome: SlotOutcome,
    pub points: Points,
}

/// One scored row: a player's picks plus everything the engine derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredWeek {
    pub picks: PlayerWeeklyPicks,
    pub week: Week,
    pub survivor: SurvivorOutcome,
    pub survivor_point: u8,
    /// Indexed by [`PickSlot::index`]; ungated.
    pub slots: [SlotScore; SLOT_COUNT],
    pub total_points: Points,
    pub special: bool,
}

impl ScoredWeek {
    pub fn player(&self) -> &str {
        &self.picks.player
    }

    pub fn slot(&self, slot: PickSlot) -> &SlotScore {
        &self.slots[slot.index()]
    }

    /// Sum of the five slot values before the survivor gate.
    pub fn ungated_points(&self) -> Points {
        self.slots.iter().map(|s| s.points).sum()
    }

    /// True when a pick of this row sits on a game that is not settled yet.
    pub fn has_unsettled_pick(&self) -> bool {
        self.survivor == SurvivorOutcome::Pending
            || self.slots.iter().any(|s| s.outcome == SlotOutcome::Unresolved)
    }
}

/// Team lookup over one week's resolved games.
struct TeamIndex<'a> {
    games: HashMap<&'a str, &'a ResolvedGame>,
}

impl<'a> TeamIndex<'a> {
    fn new(games: &'a [ResolvedGame], week: Week) -> Self {
        let mut index = HashMap::new();
        for resolved in games.iter().filter(|g| g.game.week == week.number()) {
            for team in [&resolved.game.home_team, &resolved.game.away_team] {
                if index.insert(team.as_str(), resolved).is_some() {
                    warn!(week = %week, team = %team, "team appears in more than one game; using the last one");
                }
            }
        }
        Self { games: index }
    }

    fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn game_for(&self, team: &Team) -> Option<&'a ResolvedGame> {
        self.games.get(team.as_str()).copied()
    }

    fn survivor(&self, pick: Option<&Team>) -> SurvivorOutcome {
        let Some(team) = pick else {
            return SurvivorOutcome::NoPick;
        };
        let Some(resolved) = self.game_for(team) else {
            return SurvivorOutcome::NoGame;
        };
        match &resolved.game_winner {
            GameWinner::Team(winner) if winner == team => SurvivorOutcome::Win,
            GameWinner::Undetermined => SurvivorOutcome::Pending,
            _ => SurvivorOutcome::Loss,
        }
    }

    fn spread(&self, pick: Option<&Team>) -> SlotOutcome {
        let Some(team) = pick else {
            return SlotOutcome::NoPick;
        };
        let Some(resolved) = self.game_for(team) else {
            return SlotOutcome::NoGame;
        };
        match &resolved.spread_winner {
            SpreadWinner::Push => SlotOutcome::Push,
            SpreadWinner::Team(winner) if winner == team => SlotOutcome::Win,
            SpreadWinner::Team(_) => SlotOutcome::Loss,
            SpreadWinner::Undetermined => SlotOutcome::Unresolved,
        }
    }
}

fn score_player(picks: &PlayerWeeklyPicks, index: &TeamIndex<'_>, week: Week) -> ScoredWeek {
    let survivor = index.survivor(picks.survivor_pick.as_ref());
    let survivor_point = survivor.point();

    let slots = PickSlot::ALL.map(|slot| {
        let outcome = index.spread(picks.pick(slot));
        SlotScore {
            outcome,
            points: outcome.base().times(slot.weight()),
        }
    });

    let ungated: Points = slots.iter().map(|s| s.points).sum();
    let total_points = ungated.times(survivor_point);
    let special = survivor_point == 0 && ungated == SPECIAL_THRESHOLD;

    for (slot, score) in PickSlot::ALL.iter().zip(&slots) {
        if score.outcome == SlotOutcome::NoGame {
            warn!(week = %week, player = %picks.player, slot = slot.column(), "spread pick has no game this week");
        }
    }
    if survivor == SurvivorOutcome::NoGame {
        warn!(week = %week, player = %picks.player, "survivor pick has no game this week");
    }

    ScoredWeek {
        picks: picks.clone(),
        week,
        survivor,
        survivor_point,
        slots,
        total_points,
        special,
    }
}

/// Score every player's picks against one week's resolved games.
///
/// Games belonging to other weeks are ignored. Fails only when the requested
/// week has no games at all; every pick row yields exactly one output row.
pub fn score_week(
    picks: &[PlayerWeeklyPicks],
    resolved_games: &[ResolvedGame],
    week: Week,
) -> Result<Vec<ScoredWeek>, ScoringError> {
    let index = TeamIndex::new(resolved_games, week);
    if index.is_empty() {
        return Err(ScoringError::NoGames { week });
    }

    let scored: Vec<ScoredWeek> = picks
        .iter()
        .map(|row| score_player(row, &index, week))
        .collect();

    debug!(
        week = %week,
        players = scored.len(),
        survivors = scored.iter().filter(|s| s.survivor_point == 1).count(),
        specials = scored.iter().filter(|s| s.special).count(),
        "scored week"
    );
    Ok(scored)
}

/// Raw inputs for one week of a batch.
#[derive(Debug, Clone)]
pub struct WeekInput {
    pub week: Week,
    pub picks: Vec<PlayerWeeklyPicks>,
    pub games: Vec<Game>,
}

/// Resolve and score several weeks at once.
///
/// Weeks are independent so they are processed in parallel; the result is
/// ordered by week.
pub fn score_weeks(inputs: &[WeekInput]) -> Vec<(Week, Result<Vec<ScoredWeek>, ScoringError>)> {
    let mut results: Vec<_> = inputs
        .par_iter()
        .map(|input| {
            let resolved = resolve(&input.games);
            (input.week, score_week(&input.picks, &resolved, input.week))
        })
        .collect();
    results.sort_by_key(|(week, _)| *week);
    results
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;

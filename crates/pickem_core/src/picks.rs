//! Player picks for a single week.

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Number of spread picks each player makes per week.
pub const SLOT_COUNT: usize = 5;

/// One of the five against-the-spread pick slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PickSlot {
    TwoPoint,
    OnePoint1,
    OnePoint2,
    OnePoint3,
    OnePoint4,
}

impl PickSlot {
    /// All slots in sheet column order.
    pub const ALL: [PickSlot; SLOT_COUNT] = [
        PickSlot::TwoPoint,
        PickSlot::OnePoint1,
        PickSlot::OnePoint2,
        PickSlot::OnePoint3,
        PickSlot::OnePoint4,
    ];

    /// Multiplier applied to the slot's base value.
    pub fn weight(self) -> u8 {
        match self {
            PickSlot::TwoPoint => 2,
            _ => 1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PickSlot::TwoPoint => 0,
            PickSlot::OnePoint1 => 1,
            PickSlot::OnePoint2 => 2,
            PickSlot::OnePoint3 => 3,
            PickSlot::OnePoint4 => 4,
        }
    }

    /// Column holding the picked team.
    pub fn column(self) -> &'static str {
        match self {
            PickSlot::TwoPoint => "2 Point Spread",
            PickSlot::OnePoint1 => "1 Point Spread (1)",
            PickSlot::OnePoint2 => "1 Point Spread (2)",
            PickSlot::OnePoint3 => "1 Point Spread (3)",
            PickSlot::OnePoint4 => "1 Point Spread (4)",
        }
    }

    /// Column holding the slot's awarded points.
    pub fn points_column(self) -> &'static str {
        match self {
            PickSlot::TwoPoint => "2 Point Spread Points",
            PickSlot::OnePoint1 => "1 Point Spread (1) Points",
            PickSlot::OnePoint2 => "1 Point Spread (2) Points",
            PickSlot::OnePoint3 => "1 Point Spread (3) Points",
            PickSlot::OnePoint4 => "1 Point Spread (4) Points",
        }
    }
}

/// A player's submission for one week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerWeeklyPicks {
    pub player: String,
    pub survivor_pick: Option<Team>,
    /// Indexed by [`PickSlot::index`].
    pub spread_picks: [Option<Team>; SLOT_COUNT],
}

impl PlayerWeeklyPicks {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            survivor_pick: None,
            spread_picks: Default::default(),
        }
    }

    pub fn with_survivor(mut self, team: &str) -> Self {
        self.survivor_pick = Team::parse(team);
        self
    }

    pub fn with_pick(mut self, slot: PickSlot, team: &str) -> Self {
        self.spread_picks[slot.index()] = Team::parse(team);
        self
    }

    pub fn pick(&self, slot: PickSlot) -> Option<&Team> {
        self.spread_picks[slot.index()].as_ref()
    }

    /// Iterate `(slot, pick)` in column order.
    pub fn slots(&self) -> impl Iterator<Item = (PickSlot, Option<&Team>)> + '_ {
        PickSlot::ALL.into_iter().map(move |slot| (slot, self.pick(slot)))
    }
}

//! Pairings already played, keyed per leg.

use crate::models::{Leg, Match, TeamId};
use rustc_hash::FxHashSet;

/// Unordered pairing within one leg. `(a, b)` and `(b, a)` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    pub leg: Leg,
    pub low: TeamId,
    pub high: TeamId,
}

impl PairKey {
    pub fn new(leg: Leg, a: TeamId, b: TeamId) -> Self {
        Self { leg, low: a.min(b), high: a.max(b) }
    }

    pub fn of_match(m: &Match, rounds_per_leg: u32) -> Self {
        Self::new(Leg::of_round(m.round, rounds_per_leg), m.home_team_id, m.away_team_id)
    }
}

/// Pairings already on the calendar, seeded from history and grown during
/// generation. Only used for reporting; it never changes what gets generated.
#[derive(Debug, Clone, Default)]
pub struct PlayedPairs {
    pairs: FxHashSet<PairKey>,
    rounds_per_leg: u32,
}

impl PlayedPairs {
    pub fn new(rounds_per_leg: u32) -> Self {
        Self { pairs: FxHashSet::default(), rounds_per_leg }
    }

    pub fn from_matches(matches: &[Match], rounds_per_leg: u32) -> Self {
        let mut played = Self::new(rounds_per_leg);
        for m in matches {
            played.record(m);
        }
        played
    }

    /// Registers a match. Returns false if its pairing was already known.
    pub fn record(&mut self, m: &Match) -> bool {
        self.pairs.insert(PairKey::of_match(m, self.rounds_per_leg))
    }

    pub fn contains(&self, m: &Match) -> bool {
        self.pairs.contains(&PairKey::of_match(m, self.rounds_per_leg))
    }
}

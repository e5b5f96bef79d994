//! Circle-method pairing rotation.
//!
//! Slot 0 stays fixed while the other `N-1` slots turn by one position per
//! round. Pairing the outermost positions inwards then gives every slot a
//! different opponent each round, and after `N-1` rounds every pair has met
//! exactly once.

use crate::models::{TeamId, TeamSlot};
use std::fmt;

/// Two slots facing each other in one round. `first` is home in the first leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub first: TeamSlot,
    pub second: TeamSlot,
}

impl Pairing {
    pub fn new(first: TeamSlot, second: TeamSlot) -> Self {
        Self { first, second }
    }

    pub fn has_bye(&self) -> bool {
        self.first.is_bye() || self.second.is_bye()
    }

    pub fn contains(&self, team_id: TeamId) -> bool {
        self.first == TeamSlot::Real(team_id) || self.second == TeamSlot::Real(team_id)
    }

    /// The real team facing the bye, if this is the bye pairing
    pub fn bye_partner(&self) -> Option<TeamId> {
        match (self.first, self.second) {
            (TeamSlot::Bye, TeamSlot::Real(id)) | (TeamSlot::Real(id), TeamSlot::Bye) => Some(id),
            _ => None,
        }
    }

    /// Both teams, if neither slot is the bye
    pub fn teams(&self) -> Option<(TeamId, TeamId)> {
        Some((self.first.team_id()?, self.second.team_id()?))
    }

    /// Puts `to` wherever `from` sits. Returns false if `from` is not in the pairing.
    pub fn replace(&mut self, from: TeamSlot, to: TeamSlot) -> bool {
        if self.first == from {
            self.first = to;
            true
        } else if self.second == from {
            self.second = to;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

/// Roster as rotation slots, padded with a bye when the count is odd.
pub fn pad_slots(team_ids: &[TeamId]) -> Vec<TeamSlot> {
    let mut slots: Vec<TeamSlot> = team_ids.iter().copied().map(TeamSlot::Real).collect();
    if slots.len() % 2 == 1 {
        slots.push(TeamSlot::Bye);
    }
    slots
}

/// Pairings for `round` (1-based) over an even-length slot list.
///
/// `round` only drives the rotation offset, `(round - 1) mod (N - 1)`, so
/// return-leg rounds may pass either their absolute or structural number.
pub fn generate_pairings(slots: &[TeamSlot], round: u32) -> Vec<Pairing> {
    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }
    debug_assert!(n % 2 == 0, "slot list must be padded to an even length");

    let mut rest = slots[1..].to_vec();
    let offset = (round.saturating_sub(1) as usize) % rest.len();
    rest.rotate_left(offset);

    let mut arranged = Vec::with_capacity(n);
    arranged.push(slots[0]);
    arranged.extend(rest);

    (0..n / 2).map(|i| Pairing::new(arranged[i], arranged[n - 1 - i])).collect()
}

//! Bye resolution for odd rosters.

use super::rotation::{generate_pairings, Pairing};
use crate::models::{TeamId, TeamSlot};

/// The real team paired with the bye in `pairings`, if any
pub fn rester_in(pairings: &[Pairing]) -> Option<TeamId> {
    pairings.iter().find_map(Pairing::bye_partner)
}

/// Team the rotation alone would rest in `round`. Always re-derived from the
/// rotation; `None` when the roster is even.
pub fn natural_rester(slots: &[TeamSlot], round: u32) -> Option<TeamId> {
    if !slots.contains(&TeamSlot::Bye) {
        return None;
    }
    rester_in(&generate_pairings(slots, round))
}

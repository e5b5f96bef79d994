//! Forced-rest resolution.
//!
//! A round has exactly one bye seat when the roster is odd. A restricted team
//! gets that seat by trading places with the team the rotation put there;
//! every other pairing of the round is left alone.

use super::rest::rester_in;
use super::rotation::Pairing;
use crate::models::{TeamId, TeamSlot};

/// Outcome of applying one round's restriction list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResolution {
    pub pairings: Vec<Pairing>,
    /// Team that sits out after resolution
    pub rester: Option<TeamId>,
    /// Team the rotation alone would have rested
    pub natural_rester: Option<TeamId>,
    /// Restricted roster teams that still have a match this round
    pub unhonoured: Vec<TeamId>,
}

impl RoundResolution {
    pub fn swapped(&self) -> bool {
        self.rester != self.natural_rester
    }
}

/// Restricted ids that belong to the roster, first occurrence order.
/// Unknown ids are dropped without error.
pub fn known_restrictions(restricted: &[TeamId], roster: &[TeamId]) -> Vec<TeamId> {
    let mut known: Vec<TeamId> = Vec::with_capacity(restricted.len());
    for &id in restricted {
        if roster.contains(&id) && !known.contains(&id) {
            known.push(id);
        }
    }
    known
}

/// Picks which restricted team takes the bye in `round`, cycling through the
/// list so repeated restrictions spread over several teams.
pub fn pick_forced_rester(round: u32, restricted: &[TeamId]) -> Option<TeamId> {
    if restricted.is_empty() {
        return None;
    }
    let index = (round.saturating_sub(1) as usize) % restricted.len();
    Some(restricted[index])
}

pub fn resolve_round(
    mut pairings: Vec<Pairing>,
    round: u32,
    restricted: &[TeamId],
    roster: &[TeamId],
) -> RoundResolution {
    let natural_rester = rester_in(&pairings);
    let known = known_restrictions(restricted, roster);
    let mut rester = natural_rester;

    if let (Some(natural), Some(forced)) = (natural_rester, pick_forced_rester(round, &known)) {
        if forced != natural {
            let bye_idx = pairings.iter().position(|p| p.bye_partner().is_some());
            let forced_idx = pairings.iter().position(|p| p.contains(forced));

            if let (Some(bye_idx), Some(forced_idx)) = (bye_idx, forced_idx) {
                pairings[forced_idx].replace(TeamSlot::Real(forced), TeamSlot::Real(natural));
                pairings[bye_idx].replace(TeamSlot::Real(natural), TeamSlot::Real(forced));
                rester = Some(forced);
                log::debug!(
                    "Round {}: team {} rests instead of team {}",
                    round,
                    forced,
                    natural
                );
            }
        }
    }

    let unhonoured = known.into_iter().filter(|&id| Some(id) != rester).collect();

    RoundResolution { pairings, rester, natural_rester, unhonoured }
}

//! Post-generation fixture checks.
//!
//! Every check is advisory: failures become messages in the report and the
//! schedule is handed back regardless.

use super::history::{PairKey, PlayedPairs};
use crate::models::{Match, TeamId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

pub struct FixtureValidator<'a> {
    team_ids: &'a [TeamId],
    rounds_per_leg: u32,
    history: &'a [Match],
    /// Resting team per round, used to excuse teams missing from a partial range
    resters: BTreeMap<u32, Option<TeamId>>,
}

impl<'a> FixtureValidator<'a> {
    pub fn new(team_ids: &'a [TeamId], rounds_per_leg: u32, history: &'a [Match]) -> Self {
        Self { team_ids, rounds_per_leg, history, resters: BTreeMap::new() }
    }

    pub fn with_resters(mut self, resters: BTreeMap<u32, Option<TeamId>>) -> Self {
        self.resters = resters;
        self
    }

    pub fn validate(&self, matches: &[Match]) -> ValidationReport {
        let mut errors = Vec::new();

        if matches.is_empty() {
            errors.push("Fixture contains no matches".to_string());
        }

        self.check_roster(matches, &mut errors);
        self.check_coverage(matches, &mut errors);
        self.check_self_play(matches, &mut errors);
        self.check_batch_duplicates(matches, &mut errors);
        self.check_history_duplicates(matches, &mut errors);
        self.check_balance(matches, &mut errors);

        ValidationReport::from_errors(errors)
    }

    fn check_roster(&self, matches: &[Match], errors: &mut Vec<String>) {
        let unknown: BTreeSet<TeamId> = matches
            .iter()
            .flat_map(|m| [m.home_team_id, m.away_team_id])
            .filter(|id| !self.team_ids.contains(id))
            .collect();

        for id in unknown {
            errors.push(format!("Team {} is scheduled but is not in the roster", id));
        }
    }

    fn check_coverage(&self, matches: &[Match], errors: &mut Vec<String>) {
        let rounds: BTreeSet<u32> = matches.iter().map(|m| m.round).collect();

        for &team_id in self.team_ids {
            if matches.iter().any(|m| m.involves(team_id)) {
                continue;
            }

            let rests_every_round =
                rounds.iter().all(|round| self.resters.get(round).copied().flatten() == Some(team_id));
            if !rests_every_round {
                errors.push(format!("Team {} does not appear in any match", team_id));
            }
        }
    }

    fn check_self_play(&self, matches: &[Match], errors: &mut Vec<String>) {
        for m in matches.iter().filter(|m| m.home_team_id == m.away_team_id) {
            errors.push(format!("Team {} plays itself in round {}", m.home_team_id, m.round));
        }
    }

    fn check_batch_duplicates(&self, matches: &[Match], errors: &mut Vec<String>) {
        let mut seen: BTreeMap<PairKey, u32> = BTreeMap::new();

        for m in matches {
            let key = PairKey::of_match(m, self.rounds_per_leg);
            if let Some(first_round) = seen.insert(key, m.round) {
                errors.push(format!(
                    "Teams {} and {} meet more than once in the {} leg (rounds {} and {})",
                    key.low, key.high, key.leg, first_round, m.round
                ));
            }
        }
    }

    fn check_history_duplicates(&self, matches: &[Match], errors: &mut Vec<String>) {
        if self.history.is_empty() {
            return;
        }

        let played = PlayedPairs::from_matches(self.history, self.rounds_per_leg);
        for m in matches.iter().filter(|m| played.contains(m)) {
            errors.push(format!(
                "Teams {} and {} in round {} already met in the existing matches",
                m.home_team_id, m.away_team_id, m.round
            ));
        }
    }

    fn check_balance(&self, matches: &[Match], errors: &mut Vec<String>) {
        if self.team_ids.is_empty() {
            return;
        }

        let mut counts: BTreeMap<TeamId, usize> =
            self.team_ids.iter().map(|&id| (id, 0)).collect();
        for m in matches {
            for id in [m.home_team_id, m.away_team_id] {
                if let Some(count) = counts.get_mut(&id) {
                    *count += 1;
                }
            }
        }

        let max = counts.values().copied().max().unwrap_or(0);
        let min = counts.values().copied().min().unwrap_or(0);
        if max - min > 1 {
            errors.push(format!(
                "Unbalanced match load: teams play between {} and {} matches",
                min, max
            ));
        }
    }
}

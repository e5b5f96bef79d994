use crate::models::{Match, TeamId};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Summary of a match list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FixtureStats {
    pub total_matches: usize,
    pub total_rounds: usize,
    pub participating_teams: usize,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub matches_per_team: BTreeMap<TeamId, usize>,
}

impl FixtureStats {
    pub fn summary_text(&self) -> String {
        let span = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => format!("{} ~ {}", start, end),
            _ => "no dates".to_string(),
        };
        format!(
            "{} matches, {} rounds, {} teams ({})",
            self.total_matches, self.total_rounds, self.participating_teams, span
        )
    }
}

pub fn fixture_stats(matches: &[Match]) -> FixtureStats {
    let rounds: BTreeSet<u32> = matches.iter().map(|m| m.round).collect();

    let mut matches_per_team: BTreeMap<TeamId, usize> = BTreeMap::new();
    for m in matches {
        *matches_per_team.entry(m.home_team_id).or_default() += 1;
        *matches_per_team.entry(m.away_team_id).or_default() += 1;
    }

    FixtureStats {
        total_matches: matches.len(),
        total_rounds: rounds.len(),
        participating_teams: matches_per_team.len(),
        start_date: matches.iter().map(|m| m.scheduled_date).min(),
        end_date: matches.iter().map(|m| m.scheduled_date).max(),
        matches_per_team,
    }
}

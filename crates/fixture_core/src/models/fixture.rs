use super::team::TeamId;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Match lifecycle. Generated matches are always `Scheduled`; the other
/// states only arrive through caller-supplied history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Postponed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Regular,
}

/// Ida (first leg) or vuelta (return leg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Leg {
    First,
    Return,
}

impl Leg {
    /// Leg an absolute round belongs to. Rounds past the first leg are return rounds.
    pub fn of_round(round: u32, rounds_per_leg: u32) -> Self {
        if round <= rounds_per_leg {
            Leg::First
        } else {
            Leg::Return
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::First => write!(f, "first"),
            Leg::Return => write!(f, "return"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Match {
    pub tournament_id: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub scheduled_date: NaiveDate,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub status: MatchStatus,
    pub round: u32,
    pub phase: MatchPhase,
}

impl Match {
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// Round → real team that sits out that round
pub type RestRecord = BTreeMap<u32, TeamId>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FixtureResult {
    pub matches: Vec<Match>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub teams_resting: RestRecord,
    /// Advisory messages: dropped teams, unhonoured restrictions, validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl FixtureResult {
    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }
}

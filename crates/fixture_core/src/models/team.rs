use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type TeamId = u32;

fn default_true() -> bool {
    true
}

/// Roster entry. The scheduler only looks at `id` and `active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default = "default_true")]
    pub active: bool,
    /// Opaque caller data, carried through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), active: true, metadata: BTreeMap::new() }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// One position in the rotation polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSlot {
    Real(TeamId),
    /// Padding slot for odd rosters; whoever faces it rests
    Bye,
}

impl TeamSlot {
    pub fn team_id(self) -> Option<TeamId> {
        match self {
            TeamSlot::Real(id) => Some(id),
            TeamSlot::Bye => None,
        }
    }

    pub fn is_bye(self) -> bool {
        matches!(self, TeamSlot::Bye)
    }
}

impl fmt::Display for TeamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSlot::Real(id) => write!(f, "{}", id),
            TeamSlot::Bye => write!(f, "BYE"),
        }
    }
}

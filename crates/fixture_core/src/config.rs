//! # Fixture options
//!
//! Every field has a default, so `{}` is a valid options document.
//!
//! ```rust
//! use fixture_core::config::FixtureOptions;
//!
//! let options = FixtureOptions::from_json(r#"{"allow_return_leg": true}"#).unwrap();
//! assert_eq!(options.days_between_rounds, 7);
//! ```

use crate::error::{FixtureError, Result};
use crate::models::{Match, TeamId};
use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, fs};

pub const OPTIONS_PATH_ENV: &str = "FIXTURE_OPTIONS_PATH";

pub const DEFAULT_DAYS_BETWEEN_ROUNDS: u32 = 7;

pub const DEFAULT_VENUES: [&str; 2] = ["Main Stadium", "Secondary Stadium"];

pub const DEFAULT_REFEREES: [&str; 3] = ["Referee A", "Referee B", "Referee C"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FixtureOptions {
    /// Add the vuelta with home/away reversed
    pub allow_return_leg: bool,
    /// Date of round 1; `None` means today
    pub start_date: Option<NaiveDate>,
    pub days_between_rounds: u32,
    pub venues: Vec<String>,
    pub referees: Vec<String>,
    /// Absolute round → teams that must not play that round
    pub unavailable_by_round: BTreeMap<u32, Vec<TeamId>>,
    pub start_round: u32,
    /// Last round to generate; `None` means the last round of the fixture
    pub end_round: Option<u32>,
    /// Already-played or already-persisted matches of the same tournament
    pub existing_matches: Vec<Match>,
}

impl Default for FixtureOptions {
    fn default() -> Self {
        Self {
            allow_return_leg: false,
            start_date: None,
            days_between_rounds: DEFAULT_DAYS_BETWEEN_ROUNDS,
            venues: DEFAULT_VENUES.iter().map(|v| v.to_string()).collect(),
            referees: DEFAULT_REFEREES.iter().map(|r| r.to_string()).collect(),
            unavailable_by_round: BTreeMap::new(),
            start_round: 1,
            end_round: None,
            existing_matches: Vec::new(),
        }
    }
}

impl FixtureOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_return_leg(mut self, allow: bool) -> Self {
        self.allow_return_leg = allow;
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_round_range(mut self, start_round: u32, end_round: Option<u32>) -> Self {
        self.start_round = start_round;
        self.end_round = end_round;
        self
    }

    pub fn with_unavailable(mut self, round: u32, team_ids: Vec<TeamId>) -> Self {
        self.unavailable_by_round.insert(round, team_ids);
        self
    }

    pub fn with_existing_matches(mut self, matches: Vec<Match>) -> Self {
        self.existing_matches = matches;
        self
    }

    /// Start date with the "today" default resolved
    pub fn resolved_start_date(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Checks applied to options coming from files or JSON requests.
    /// The generator itself clamps ranges instead of rejecting them.
    pub fn validate(&self) -> Result<()> {
        if self.start_round == 0 {
            return Err(FixtureError::InvalidOptions("start_round must be at least 1".to_string()));
        }

        if let Some(end_round) = self.end_round {
            if end_round < self.start_round {
                return Err(FixtureError::InvalidOptions(format!(
                    "end_round ({}) must be >= start_round ({})",
                    end_round, self.start_round
                )));
            }
        }

        if self.venues.iter().any(|v| v.trim().is_empty()) {
            return Err(FixtureError::InvalidOptions("venue names cannot be blank".to_string()));
        }

        if self.referees.iter().any(|r| r.trim().is_empty()) {
            return Err(FixtureError::InvalidOptions("referee names cannot be blank".to_string()));
        }

        Ok(())
    }
}

/// Loads options from the file named by `FIXTURE_OPTIONS_PATH`, if set.
pub fn options_from_env() -> Result<Option<FixtureOptions>> {
    let Ok(path) = env::var(OPTIONS_PATH_ENV) else {
        return Ok(None);
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(None);
    }

    load_options_file(OPTIONS_PATH_ENV, path).map(Some)
}

fn load_options_file(var: &'static str, path: &str) -> Result<FixtureOptions> {
    let config_error = |message: String| FixtureError::ConfigFile {
        var,
        path: path.to_string(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let options = FixtureOptions::from_json(&content).map_err(|e| config_error(e.to_string()))?;
    options.validate().map_err(|e| config_error(e.to_string()))?;

    log::debug!("Loaded fixture options from {}", path);
    Ok(options)
}

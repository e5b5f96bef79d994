// Fixture JSON API for callers outside Rust (web backend, admin tools)
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::FixtureOptions;
use crate::error::FixtureError;
use crate::models::{Match, RestRecord, Team};
use crate::schedule::{fixture_stats, FixtureGenerator, FixtureStats};

pub const SCHEMA_VERSION: u8 = 1;

/// Fixture request
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FixtureRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub tournament_id: u32,
    /// Not needed for `Stats`
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub options: FixtureOptions,
    pub request_type: FixtureRequestType,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum FixtureRequestType {
    /// Generate the configured round range
    Generate,

    /// Check a match list against the roster and `options.existing_matches`
    Validate { matches: Vec<Match> },

    /// Summary numbers for a match list
    Stats { matches: Vec<Match> },

    /// Resting team per round of the configured range
    RestingTeams,
}

/// Fixture response
#[derive(Debug, Serialize, JsonSchema)]
pub struct FixtureResponse {
    pub schema_version: u8,
    pub success: bool,
    pub response_type: FixtureResponseType,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(tag = "type")]
pub enum FixtureResponseType {
    Fixture {
        matches: Vec<Match>,
        teams_resting: RestRecord,
        diagnostics: Vec<String>,
        stats: FixtureStats,
    },

    Validation { is_valid: bool, errors: Vec<String> },

    Stats { stats: FixtureStats },

    RestingTeams { teams_resting: RestRecord },

    /// Rejected request (roster or options)
    Error { reason: String },
}

impl FixtureResponse {
    fn ok(response_type: FixtureResponseType) -> Self {
        Self { schema_version: SCHEMA_VERSION, success: true, response_type, error_message: None }
    }

    fn failure(err: FixtureError) -> Self {
        let reason = err.to_string();
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            response_type: FixtureResponseType::Error { reason: reason.clone() },
            error_message: Some(reason),
        }
    }
}

/// Runs one request. Malformed JSON and unknown schema versions are `Err`;
/// rejected rosters or options come back as a `success: false` response.
pub fn execute_fixture_json(request_json: &str) -> Result<String, String> {
    let request: FixtureRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let response = match handle_request(request) {
        Ok(response_type) => FixtureResponse::ok(response_type),
        Err(err) => {
            log::warn!("Fixture request rejected: {}", err);
            FixtureResponse::failure(err)
        }
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

fn handle_request(request: FixtureRequest) -> crate::Result<FixtureResponseType> {
    request.options.validate()?;

    let FixtureRequest { tournament_id, teams, options, request_type, .. } = request;
    let build_generator = move || FixtureGenerator::new(&teams, tournament_id, options);

    let response_type = match request_type {
        FixtureRequestType::Generate => {
            let generator = build_generator()?;
            let result = generator.generate_fixture();
            let stats = generator.get_fixture_stats(&result.matches);
            FixtureResponseType::Fixture {
                matches: result.matches,
                teams_resting: result.teams_resting,
                diagnostics: result.diagnostics,
                stats,
            }
        }

        FixtureRequestType::Validate { matches } => {
            let report = build_generator()?.validate_fixture(&matches);
            FixtureResponseType::Validation { is_valid: report.is_valid, errors: report.errors }
        }

        // Stats work on any match list, no roster needed
        FixtureRequestType::Stats { matches } => {
            FixtureResponseType::Stats { stats: fixture_stats(&matches) }
        }

        FixtureRequestType::RestingTeams => {
            let generator = build_generator()?;
            let teams_resting = generator
                .round_range()
                .filter_map(|round| generator.resting_team_for_round(round).map(|id| (round, id)))
                .collect();
            FixtureResponseType::RestingTeams { teams_resting }
        }
    };

    Ok(response_type)
}

pub fn fixture_request_schema() -> Result<String, String> {
    serde_json::to_string_pretty(&schemars::schema_for!(FixtureRequest))
        .map_err(|e| format!("Failed to serialize schema: {}", e))
}

pub fn fixture_response_schema() -> Result<String, String> {
    serde_json::to_string_pretty(&schemars::schema_for!(FixtureResponse))
        .map_err(|e| format!("Failed to serialize schema: {}", e))
}

//! # fixture_core - Deterministic Round-Robin Fixture Generator
//!
//! Builds league calendars ("jornadas") from a team roster.
//!
//! ## Features
//! - Circle-method round robin, single or double leg
//! - Byes for odd rosters, with forced-rest swaps per round
//! - Partial regeneration from any round, checked against played matches
//! - Advisory validation and summary stats
//! - JSON API for callers outside Rust

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;

pub use api::{execute_fixture_json, fixture_request_schema, FixtureRequest, FixtureResponse};
pub use config::{options_from_env, FixtureOptions};
pub use error::{FixtureError, Result};
pub use models::{FixtureResult, Leg, Match, MatchPhase, MatchStatus, RestRecord, Team, TeamId, TeamSlot};
pub use schedule::{FixtureGenerator, FixtureStats, ValidationReport};

/// Builds a generator for `teams` and runs the full generation.
pub fn generate_fixture(
    teams: &[Team],
    tournament_id: u32,
    options: FixtureOptions,
) -> Result<FixtureResult> {
    Ok(FixtureGenerator::new(teams, tournament_id, options)?.generate_fixture())
}

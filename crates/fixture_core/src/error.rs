use crate::models::TeamId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("At least 2 active teams are required to build a fixture, found {found}")]
    NotEnoughTeams { found: usize },

    #[error("Team {id} appears more than once in the roster")]
    DuplicateTeam { id: TeamId },

    #[error("Invalid fixture options: {0}")]
    InvalidOptions(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load options from {var}='{path}': {message}")]
    ConfigFile { var: &'static str, path: String, message: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;

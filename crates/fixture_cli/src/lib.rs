//! Fixture CLI Library
//!
//! JSON files → fixture_core → JSON files

use anyhow::{Context, Result};
use fixture_core::{options_from_env, FixtureOptions, FixtureResult, Match, Team};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} JSON: {}", what, path.display()))
}

pub fn load_teams(path: &Path) -> Result<Vec<Team>> {
    read_json(path, "teams")
}

/// Accepts either a bare match array or a saved `FixtureResult`
pub fn load_matches(path: &Path) -> Result<Vec<Match>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum MatchFile {
        List(Vec<Match>),
        Fixture(FixtureResult),
    }

    Ok(match read_json::<MatchFile>(path, "matches")? {
        MatchFile::List(matches) => matches,
        MatchFile::Fixture(result) => result.matches,
    })
}

/// Options from an explicit file, else `FIXTURE_OPTIONS_PATH`, else defaults
pub fn load_options(path: Option<&Path>) -> Result<FixtureOptions> {
    if let Some(path) = path {
        let options: FixtureOptions = read_json(path, "options")?;
        options.validate().with_context(|| format!("Invalid options in {}", path.display()))?;
        return Ok(options);
    }

    Ok(options_from_env()?.unwrap_or_default())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

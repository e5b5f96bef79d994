//! # Round-robin scheduler
//!
//! - `rotation`: circle-method pairings per round
//! - `rest`: which team faces the bye
//! - `constraints`: forced rests swapped onto the bye seat
//! - `history`: played-pairing set for duplicate detection
//! - `generator`: emits dated matches with venue/referee rotation
//! - `validator`: advisory checks over a finished match list
//! - `stats`: summary numbers for a match list

pub mod constraints;
pub mod generator;
pub mod history;
pub mod rest;
pub mod rotation;
pub mod stats;
pub mod validator;

#[cfg(test)]
mod tests;

pub use constraints::RoundResolution;
pub use generator::FixtureGenerator;
pub use history::{PairKey, PlayedPairs};
pub use rotation::{generate_pairings, pad_slots, Pairing};
pub use stats::{fixture_stats, FixtureStats};
pub use validator::{FixtureValidator, ValidationReport};

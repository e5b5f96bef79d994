//! Plain data records consumed and emitted by the scheduler.

pub mod fixture;
pub mod team;

pub use fixture::{FixtureResult, Leg, Match, MatchPhase, MatchStatus, RestRecord};
pub use team::{Team, TeamId, TeamSlot};

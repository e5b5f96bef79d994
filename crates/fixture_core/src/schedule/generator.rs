//! Round-by-round fixture emission.

use super::constraints::{resolve_round, RoundResolution};
use super::history::PlayedPairs;
use super::rest::natural_rester;
use super::rotation::{generate_pairings, pad_slots};
use super::stats::{fixture_stats, FixtureStats};
use super::validator::{FixtureValidator, ValidationReport};
use crate::config::FixtureOptions;
use crate::error::{FixtureError, Result};
use crate::models::{FixtureResult, Leg, Match, MatchPhase, MatchStatus, Team, TeamId, TeamSlot};
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Schedules one tournament. Holds no state beyond its inputs, so every call
/// to [`FixtureGenerator::generate_fixture`] yields the same result.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    tournament_id: u32,
    team_ids: Vec<TeamId>,
    slots: Vec<TeamSlot>,
    options: FixtureOptions,
    start_date: NaiveDate,
    /// Roster notes produced while building the generator
    setup_notes: Vec<String>,
}

impl FixtureGenerator {
    pub fn new(teams: &[Team], tournament_id: u32, options: FixtureOptions) -> Result<Self> {
        let mut team_ids: Vec<TeamId> = Vec::with_capacity(teams.len());
        let mut setup_notes = Vec::new();

        for team in teams {
            if !team.active {
                let note = format!("Team {} ({}) is inactive and was left out", team.id, team.name);
                log::warn!("{}", note);
                setup_notes.push(note);
                continue;
            }
            if team_ids.contains(&team.id) {
                return Err(FixtureError::DuplicateTeam { id: team.id });
            }
            team_ids.push(team.id);
        }

        if team_ids.len() < 2 {
            return Err(FixtureError::NotEnoughTeams { found: team_ids.len() });
        }

        let slots = pad_slots(&team_ids);
        let start_date = options.resolved_start_date();
        let generator = Self { tournament_id, team_ids, slots, options, start_date, setup_notes };

        let last_round = generator.total_rounds();
        if generator.checked_date(last_round).is_none() {
            return Err(FixtureError::InvalidOptions(format!(
                "round {} starting {} every {} days falls past the last supported date",
                last_round, start_date, generator.options.days_between_rounds
            )));
        }

        Ok(generator)
    }

    pub fn tournament_id(&self) -> u32 {
        self.tournament_id
    }

    pub fn team_ids(&self) -> &[TeamId] {
        &self.team_ids
    }

    pub fn options(&self) -> &FixtureOptions {
        &self.options
    }

    pub fn has_bye(&self) -> bool {
        self.slots.contains(&TeamSlot::Bye)
    }

    pub fn rounds_per_leg(&self) -> u32 {
        self.slots.len() as u32 - 1
    }

    pub fn total_rounds(&self) -> u32 {
        if self.options.allow_return_leg {
            self.rounds_per_leg() * 2
        } else {
            self.rounds_per_leg()
        }
    }

    /// Rounds this generator emits, after clamping the configured bounds.
    /// Empty when the bounds do not overlap the fixture.
    pub fn round_range(&self) -> RangeInclusive<u32> {
        let total = self.total_rounds();
        let start = self.options.start_round.max(1);
        let end = self.options.end_round.unwrap_or(total).min(total);
        start..=end
    }

    /// Rotation round a return-leg round mirrors
    fn structural_round(&self, round: u32) -> u32 {
        match Leg::of_round(round, self.rounds_per_leg()) {
            Leg::First => round,
            Leg::Return => round - self.rounds_per_leg(),
        }
    }

    fn checked_date(&self, round: u32) -> Option<NaiveDate> {
        let offset = u64::from(round.saturating_sub(1)) * u64::from(self.options.days_between_rounds);
        self.start_date.checked_add_days(Days::new(offset))
    }

    /// Date of `round`. Every round of the fixture is known to fit in
    /// `NaiveDate`; rounds past the end saturate at `NaiveDate::MAX`.
    pub fn scheduled_date(&self, round: u32) -> NaiveDate {
        self.checked_date(round).unwrap_or(NaiveDate::MAX)
    }

    pub fn resolve_round(&self, round: u32) -> RoundResolution {
        let pairings = generate_pairings(&self.slots, self.structural_round(round));
        let restricted = self
            .options
            .unavailable_by_round
            .get(&round)
            .map(Vec::as_slice)
            .unwrap_or_default();
        resolve_round(pairings, round, restricted, &self.team_ids)
    }

    /// Team the rotation rests in `round`, ignoring restrictions
    pub fn natural_resting_team(&self, round: u32) -> Option<TeamId> {
        natural_rester(&self.slots, self.structural_round(round))
    }

    /// Team that actually rests in `round` once restrictions are applied
    pub fn resting_team_for_round(&self, round: u32) -> Option<TeamId> {
        self.resolve_round(round).rester
    }

    fn pick_from_pool(pool: &[String], round: u32, index: usize) -> Option<String> {
        if pool.is_empty() {
            return None;
        }
        pool.get((round as usize + index) % pool.len()).cloned()
    }

    pub fn generate_fixture(&self) -> FixtureResult {
        let rounds_per_leg = self.rounds_per_leg();
        let mut result =
            FixtureResult { diagnostics: self.setup_notes.clone(), ..FixtureResult::default() };
        let mut played = PlayedPairs::from_matches(&self.options.existing_matches, rounds_per_leg);

        let range = self.round_range();
        if range.is_empty() {
            let note = format!(
                "Round range {}..={} does not overlap the {} rounds of this fixture",
                range.start(),
                range.end(),
                self.total_rounds()
            );
            log::warn!("{}", note);
            result.diagnostics.push(note);
        }

        for round in range {
            let resolution = self.resolve_round(round);
            let leg = Leg::of_round(round, rounds_per_leg);

            if let Some(rester) = resolution.rester {
                result.teams_resting.insert(round, rester);
            }
            if !resolution.unhonoured.is_empty() {
                let note = format!(
                    "Round {}: teams {:?} are unavailable but still scheduled",
                    round, resolution.unhonoured
                );
                log::warn!("{}", note);
                result.diagnostics.push(note);
            }

            let mut index = 0;
            for pairing in &resolution.pairings {
                let Some((first, second)) = pairing.teams() else {
                    continue;
                };
                let (home, away) = match leg {
                    Leg::First => (first, second),
                    Leg::Return => (second, first),
                };

                let fixture_match = Match {
                    tournament_id: self.tournament_id,
                    home_team_id: home,
                    away_team_id: away,
                    scheduled_date: self.scheduled_date(round),
                    venue: Self::pick_from_pool(&self.options.venues, round, index),
                    referee: Self::pick_from_pool(&self.options.referees, round, index),
                    status: MatchStatus::Scheduled,
                    round,
                    phase: MatchPhase::Regular,
                };

                if !played.record(&fixture_match) {
                    log::warn!(
                        "Round {}: {} vs {} repeats a pairing already on the calendar",
                        round,
                        home,
                        away
                    );
                }

                result.matches.push(fixture_match);
                index += 1;
            }

            log::debug!(
                "Round {} ({} leg): {} matches, resting {:?}",
                round,
                leg,
                index,
                resolution.rester
            );
        }

        let report = self.validate_fixture(&result.matches);
        for error in report.errors {
            log::warn!("Fixture validation: {}", error);
            result.diagnostics.push(error);
        }

        log::info!(
            "Tournament {}: generated {} matches for rounds {}..={}",
            self.tournament_id,
            result.matches.len(),
            self.round_range().start(),
            self.round_range().end()
        );

        result
    }

    pub fn validate_fixture(&self, matches: &[Match]) -> ValidationReport {
        let resters: BTreeMap<u32, Option<TeamId>> = matches
            .iter()
            .map(|m| m.round)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|round| (round, self.resting_team_for_round(round)))
            .collect();

        FixtureValidator::new(&self.team_ids, self.rounds_per_leg(), &self.options.existing_matches)
            .with_resters(resters)
            .validate(matches)
    }

    pub fn get_fixture_stats(&self, matches: &[Match]) -> FixtureStats {
        fixture_stats(matches)
    }
}

// Full-generation scenarios and properties
use super::*;
use crate::config::FixtureOptions;
use crate::models::{Match, Team, TeamId};
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn roster(count: u32) -> Vec<Team> {
    (1..=count).map(|id| Team::new(id, format!("Club {}", id))).collect()
}

fn options() -> FixtureOptions {
    FixtureOptions::default().with_start_date(NaiveDate::from_ymd_opt(2025, 9, 6).unwrap())
}

fn matches_per_team(matches: &[Match]) -> BTreeMap<TeamId, usize> {
    let mut counts = BTreeMap::new();
    for m in matches {
        *counts.entry(m.home_team_id).or_insert(0) += 1;
        *counts.entry(m.away_team_id).or_insert(0) += 1;
    }
    counts
}

fn unordered(m: &Match) -> (TeamId, TeamId) {
    (m.home_team_id.min(m.away_team_id), m.home_team_id.max(m.away_team_id))
}

#[test]
fn test_six_teams_single_leg() {
    let generator = FixtureGenerator::new(&roster(6), 1, options()).unwrap();
    let result = generator.generate_fixture();

    assert_eq!(result.matches.len(), 15);
    for round in 1..=5 {
        assert_eq!(result.matches_in_round(round).count(), 3);
    }
    assert!(result.teams_resting.is_empty());
    assert!(matches_per_team(&result.matches).values().all(|&count| count == 5));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);

    let stats = generator.get_fixture_stats(&result.matches);
    assert_eq!(stats.total_rounds, 5);
    assert_eq!(stats.participating_teams, 6);
    assert_eq!(stats.start_date, NaiveDate::from_ymd_opt(2025, 9, 6));
    assert_eq!(stats.end_date, NaiveDate::from_ymd_opt(2025, 10, 4));
}

#[test]
fn test_nine_teams_each_rest_once() {
    let result = FixtureGenerator::new(&roster(9), 1, options()).unwrap().generate_fixture();

    assert_eq!(result.matches.len(), 36);
    for round in 1..=9 {
        assert_eq!(result.matches_in_round(round).count(), 4);
        let rester = result.teams_resting[&round];
        assert!(result.matches_in_round(round).all(|m| !m.involves(rester)));
    }

    let resters: BTreeSet<TeamId> = result.teams_resting.values().copied().collect();
    assert_eq!(resters.len(), 9);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn test_partial_regeneration_with_forced_rest() {
    let teams = roster(9);
    let first_round = FixtureGenerator::new(&teams, 1, options().with_round_range(1, Some(1)))
        .unwrap()
        .generate_fixture()
        .matches;
    assert_eq!(first_round.len(), 4);
    let covered: BTreeSet<TeamId> =
        first_round.iter().flat_map(|m| [m.home_team_id, m.away_team_id]).collect();
    assert_eq!(covered.len(), 8);

    let resume = options()
        .with_round_range(2, Some(2))
        .with_unavailable(2, vec![9])
        .with_existing_matches(first_round.clone());
    let generator = FixtureGenerator::new(&teams, 1, resume).unwrap();
    let result = generator.generate_fixture();

    assert_ne!(generator.natural_resting_team(2), Some(9));
    assert_eq!(result.teams_resting, BTreeMap::from([(2, 9)]));
    assert_eq!(result.matches.len(), 4);
    assert!(result.matches.iter().all(|m| m.round == 2 && !m.involves(9)));

    let history: BTreeSet<_> = first_round.iter().map(unordered).collect();
    assert!(result.matches.iter().all(|m| !history.contains(&unordered(m))));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn test_return_leg_mirrors_first_leg() {
    let result = FixtureGenerator::new(&roster(6), 1, options().with_return_leg(true))
        .unwrap()
        .generate_fixture();

    assert_eq!(result.matches.len(), 30);
    let rounds: BTreeSet<u32> = result.matches.iter().map(|m| m.round).collect();
    assert_eq!(rounds, (1..=10).collect());

    for round in 1..=5 {
        let first: BTreeSet<_> =
            result.matches_in_round(round).map(|m| (m.home_team_id, m.away_team_id)).collect();
        let reversed: BTreeSet<_> = result
            .matches_in_round(round + 5)
            .map(|m| (m.away_team_id, m.home_team_id))
            .collect();
        assert_eq!(first, reversed);
    }
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn test_two_teams() {
    let result = FixtureGenerator::new(&roster(2), 1, options()).unwrap().generate_fixture();

    assert_eq!(result.matches.len(), 1);
    assert_eq!(unordered(&result.matches[0]), (1, 2));
    assert_eq!(result.matches[0].round, 1);
    assert!(result.teams_resting.is_empty());
}

#[test]
fn test_return_leg_range_starts_mid_vuelta() {
    let opts = options().with_return_leg(true).with_round_range(7, None);
    let result = FixtureGenerator::new(&roster(6), 1, opts).unwrap().generate_fixture();

    let rounds: BTreeSet<u32> = result.matches.iter().map(|m| m.round).collect();
    assert_eq!(rounds, (7..=10).collect());
    // Dates keep counting from round 1
    let round_seven = result.matches_in_round(7).next().unwrap();
    assert_eq!(round_seven.scheduled_date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
}

#[test]
fn test_resuming_return_leg_against_first_leg_history() {
    let teams = roster(5);
    let first_leg = FixtureGenerator::new(&teams, 1, options()).unwrap().generate_fixture().matches;

    let opts = options()
        .with_return_leg(true)
        .with_round_range(6, None)
        .with_existing_matches(first_leg);
    let result = FixtureGenerator::new(&teams, 1, opts).unwrap().generate_fixture();

    assert_eq!(result.matches.len(), 10);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn test_heavy_restrictions_still_return_schedule() {
    let opts = options().with_unavailable(2, vec![9]);
    let result = FixtureGenerator::new(&roster(9), 1, opts).unwrap().generate_fixture();

    assert_eq!(result.matches.len(), 36);
    assert!(result.matches_in_round(2).all(|m| !m.involves(9)));
    // The swap leaves team 9 resting twice and team 3 never
    assert!(result.diagnostics.iter().any(|d| d.starts_with("Unbalanced match load")));
    assert!(result.diagnostics.iter().any(|d| d.contains("meet more than once")));
}

#[test]
fn test_unknown_restricted_team_is_ignored() {
    let opts = options().with_unavailable(2, vec![77]);
    let generator = FixtureGenerator::new(&roster(9), 1, opts).unwrap();
    let result = generator.generate_fixture();

    assert_eq!(result.teams_resting[&2], generator.natural_resting_team(2).unwrap());
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn test_validate_flags_history_duplicates() {
    let teams = roster(4);
    let full = FixtureGenerator::new(&teams, 1, options()).unwrap().generate_fixture().matches;

    let generator =
        FixtureGenerator::new(&teams, 1, options().with_existing_matches(full.clone())).unwrap();
    let report = generator.validate_fixture(&full);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), full.len());
}

#[test]
fn test_several_restrictions_on_return_round() {
    let opts = options().with_return_leg(true).with_unavailable(10, vec![2, 6]);
    let generator = FixtureGenerator::new(&roster(7), 1, opts).unwrap();
    let result = generator.generate_fixture();

    // Round 10 mirrors round 3, but the pick cycles on the absolute round
    assert_eq!(generator.natural_resting_team(10), Some(5));
    assert_eq!(result.teams_resting[&10], 6);
    assert_eq!(result.matches_in_round(10).count(), 3);
    assert!(result.matches_in_round(10).all(|m| !m.involves(6)));
    assert!(result.matches_in_round(10).any(|m| m.involves(5)));
    assert!(result
        .diagnostics
        .contains(&"Round 10: teams [2] are unavailable but still scheduled".to_string()));

    let reversed: BTreeSet<_> =
        result.matches_in_round(10).map(|m| (m.away_team_id, m.home_team_id)).collect();
    assert!(reversed.contains(&(1, 3)));
}

fn roster_strategy() -> impl Strategy<Value = Vec<Team>> {
    prop::collection::btree_set(1u32..1000, 2..16).prop_map(|ids| {
        ids.into_iter().map(|id| Team::new(id, format!("Club {}", id))).collect()
    })
}

proptest! {
    #[test]
    fn test_single_leg_properties(teams in roster_strategy()) {
        let generator = FixtureGenerator::new(&teams, 1, options()).unwrap();
        let result = generator.generate_fixture();
        let n = teams.len();
        let rounds = if n % 2 == 0 { n - 1 } else { n };

        // Coverage and completeness
        let counts = matches_per_team(&result.matches);
        prop_assert_eq!(counts.len(), n);
        prop_assert!(counts.values().all(|&c| c == n - 1));
        for round in 1..=rounds as u32 {
            prop_assert_eq!(result.matches_in_round(round).count(), n / 2);
        }
        prop_assert_eq!(result.matches.len(), rounds * (n / 2));

        // No self-play, no repeated pairing
        prop_assert!(result.matches.iter().all(|m| m.home_team_id != m.away_team_id));
        let pairs: BTreeSet<_> = result.matches.iter().map(unordered).collect();
        prop_assert_eq!(pairs.len(), result.matches.len());

        prop_assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    }

    #[test]
    fn test_double_leg_is_valid(teams in roster_strategy()) {
        let generator =
            FixtureGenerator::new(&teams, 1, options().with_return_leg(true)).unwrap();
        let result = generator.generate_fixture();

        let counts = matches_per_team(&result.matches);
        prop_assert!(counts.values().all(|&c| c == 2 * (teams.len() - 1)));
        prop_assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    }

    #[test]
    fn test_history_respected_when_resuming(teams in roster_strategy(), split in 1u32..8) {
        let played = FixtureGenerator::new(&teams, 1, options().with_round_range(1, Some(split)))
            .unwrap()
            .generate_fixture()
            .matches;

        let resume = options().with_round_range(split + 1, None).with_existing_matches(played.clone());
        let result = FixtureGenerator::new(&teams, 1, resume).unwrap().generate_fixture();

        let history: BTreeSet<_> = played.iter().map(unordered).collect();
        prop_assert!(result.matches.iter().all(|m| !history.contains(&unordered(m))));
        prop_assert!(
            !result.diagnostics.iter().any(|d| d.contains("existing matches")),
            "{:?}",
            result.diagnostics
        );
    }

    #[test]
    fn test_partial_range_stays_balanced(teams in roster_strategy(), start in 1u32..10, len in 0u32..6) {
        let opts = options().with_return_leg(true).with_round_range(start, Some(start + len));
        let generator = FixtureGenerator::new(&teams, 1, opts).unwrap();
        let result = generator.generate_fixture();

        let mut counts: BTreeMap<TeamId, usize> =
            generator.team_ids().iter().map(|&id| (id, 0)).collect();
        for (id, c) in matches_per_team(&result.matches) {
            counts.insert(id, c);
        }
        let max = counts.values().copied().max().unwrap();
        let min = counts.values().copied().min().unwrap();
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn test_forced_rest_honoured(
        (n, return_leg, round, pick) in (1usize..8, any::<bool>()).prop_flat_map(|(half, return_leg)| {
            let n = 2 * half + 1;
            let last_round = (if return_leg { 2 * n } else { n }) as u32;
            (Just(n), Just(return_leg), 1u32..=last_round, 0..n)
        })
    ) {
        let teams = roster(n as u32);
        let forced = teams[pick].id;
        let opts = options().with_return_leg(return_leg).with_unavailable(round, vec![forced]);
        let result = FixtureGenerator::new(&teams, 1, opts).unwrap().generate_fixture();

        prop_assert!(result.matches_in_round(round).all(|m| !m.involves(forced)));
        prop_assert_eq!(result.teams_resting[&round], forced);
        prop_assert_eq!(result.matches_in_round(round).count(), n / 2);
    }
}

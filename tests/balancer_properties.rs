//! Property tests for the team balancers

mod fixtures;

use fixtures::{club_roster, roster_with_ratings};
use proptest::prelude::*;
use std::collections::HashSet;
use team_draft::balancer::{
    DraftConfig, DraftOrder, SequentialBalancer, SnakeDraftBalancer, TeamBalancer,
};
use team_draft::error::DraftError;
use team_draft::roster::sample_players;
use team_draft::types::{Player, ScoreBasis, SkillProfile};

fn skill_profile() -> impl Strategy<Value = SkillProfile> {
    prop::array::uniform7(1u8..=10).prop_map(|r| SkillProfile {
        serve: r[0],
        reception: r[1],
        passing: r[2],
        attack: r[3],
        block: r[4],
        defense: r[5],
        mobility: r[6],
    })
}

fn roster(max: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(skill_profile(), 1..=max).prop_map(|profiles| {
        profiles
            .into_iter()
            .enumerate()
            .map(|(i, skills)| Player::new(i as i64 + 1, format!("Player {}", i + 1), None, skills))
            .collect()
    })
}

fn draft_order() -> impl Strategy<Value = DraftOrder> {
    prop_oneof![Just(DraftOrder::BoundaryReset), Just(DraftOrder::Mirrored)]
}

fn score_basis() -> impl Strategy<Value = ScoreBasis> {
    prop_oneof![Just(ScoreBasis::Stored), Just(ScoreBasis::Raw)]
}

/// Roster together with a team count it can satisfy
fn roster_and_team_count() -> impl Strategy<Value = (Vec<Player>, usize)> {
    roster(40).prop_flat_map(|players| {
        let max_teams = players.len().min(8);
        (Just(players), 1..=max_teams)
    })
}

fn snake(order: DraftOrder, score_basis: ScoreBasis) -> SnakeDraftBalancer {
    SnakeDraftBalancer::new(DraftConfig { order, score_basis })
}

proptest! {
    #[test]
    fn every_player_lands_on_exactly_one_team(
        (players, k) in roster_and_team_count(),
        order in draft_order(),
        basis in score_basis(),
    ) {
        let assignment = snake(order, basis).balance(&players, k).unwrap();
        prop_assert_eq!(assignment.team_count(), k);
        prop_assert_eq!(assignment.player_count(), players.len());

        let ids: HashSet<i64> = assignment.teams().iter().flatten().map(|p| p.id).collect();
        prop_assert_eq!(ids.len(), players.len());
        prop_assert!(players.iter().all(|p| ids.contains(&p.id)));
    }

    #[test]
    fn drafting_is_deterministic(
        (players, k) in roster_and_team_count(),
        order in draft_order(),
        basis in score_basis(),
    ) {
        let balancer = snake(order, basis);
        let first = balancer.balance(&players, k).unwrap();
        let second = balancer.balance(&players, k).unwrap();
        prop_assert_eq!(first.teams(), second.teams());
    }

    #[test]
    fn top_players_open_distinct_teams(
        (players, k) in roster_and_team_count(),
        order in draft_order(),
        basis in score_basis(),
    ) {
        let assignment = snake(order, basis).balance(&players, k).unwrap();
        let team_heads: Vec<f64> = assignment.teams().iter().map(|t| t[0].score(basis)).collect();

        // the heads of teams 0..k are the k best scores, in order
        let mut scores: Vec<f64> = players.iter().map(|p| p.score(basis)).collect();
        scores.sort_by(|a, b| b.total_cmp(a));
        prop_assert_eq!(team_heads, scores[..k].to_vec());
    }

    #[test]
    fn teams_keep_ranked_order(
        (players, k) in roster_and_team_count(),
        order in draft_order(),
        basis in score_basis(),
    ) {
        let assignment = snake(order, basis).balance(&players, k).unwrap();
        for team in assignment.teams() {
            prop_assert!(team.windows(2).all(|w| w[0].score(basis) >= w[1].score(basis)));
        }
    }

    #[test]
    fn mirrored_sizes_differ_by_at_most_one((players, k) in roster_and_team_count()) {
        let assignment = snake(DraftOrder::Mirrored, ScoreBasis::Stored)
            .balance(&players, k)
            .unwrap();
        let sizes: Vec<usize> = assignment.teams().iter().map(|t| t.len()).collect();
        let max = sizes.iter().max().copied().unwrap_or(0);
        let min = sizes.iter().min().copied().unwrap_or(0);
        prop_assert!(max - min <= 1, "sizes {:?}", sizes);
    }

    #[test]
    fn too_few_players_is_rejected(players in roster(6), extra in 1usize..4) {
        let k = players.len() + extra;
        let err = snake(DraftOrder::BoundaryReset, ScoreBasis::Stored)
            .balance(&players, k)
            .unwrap_err();
        let is_insufficient = matches!(
            err.downcast_ref::<DraftError>(),
            Some(DraftError::InsufficientPlayers { available, requested })
                if *available == players.len() && *requested == k
        );
        prop_assert!(is_insufficient);
    }

    #[test]
    fn equal_scores_have_no_disparity(
        rating in 1u8..=10,
        n in 1usize..30,
        order in draft_order(),
    ) {
        let players = roster_with_ratings(&vec![rating; n]);
        let k = n.min(4);
        let report = snake(order, ScoreBasis::Raw).balance(&players, k).unwrap().report();
        prop_assert_eq!(report.average_difference, 0.0);
    }

    #[test]
    fn single_team_has_no_disparity(players in roster(30), basis in score_basis()) {
        let assignment = snake(DraftOrder::BoundaryReset, basis).balance(&players, 1).unwrap();
        prop_assert_eq!(assignment.teams()[0].len(), players.len());
        prop_assert_eq!(assignment.report().average_difference, 0.0);
    }

    #[test]
    fn sequential_baseline_is_a_partition((players, k) in roster_and_team_count()) {
        let assignment = SequentialBalancer::new(ScoreBasis::Stored).balance(&players, k).unwrap();
        prop_assert_eq!(assignment.team_count(), k);
        prop_assert_eq!(assignment.player_count(), players.len());
    }
}

#[test]
fn snake_beats_chunking_on_reference_rosters() {
    let sample: Vec<Player> = sample_players()
        .into_iter()
        .zip(1..)
        .map(|(input, id)| Player::new(id, input.name, input.photo_url, input.skills))
        .collect();

    for (name, roster) in [("sample", sample), ("club", club_roster())] {
        for basis in [ScoreBasis::Stored, ScoreBasis::Raw] {
            let baseline = SequentialBalancer::new(basis);
            for k in 2..=4 {
                let chunked = baseline.balance(&roster, k).unwrap().report();
                for order in [DraftOrder::BoundaryReset, DraftOrder::Mirrored] {
                    let drafted = snake(order, basis).balance(&roster, k).unwrap().report();
                    assert!(
                        drafted.average_difference <= chunked.average_difference + 1e-9,
                        "{} roster, k={}, {} order, {} scores: {} > {}",
                        name,
                        k,
                        order,
                        basis,
                        drafted.average_difference,
                        chunked.average_difference
                    );
                }
            }
        }
    }
}

#[test]
fn club_roster_two_teams_are_close() {
    let report = snake(DraftOrder::BoundaryReset, ScoreBasis::Stored)
        .balance(&club_roster(), 2)
        .unwrap()
        .report();
    assert!(report.average_difference < 0.6);
}

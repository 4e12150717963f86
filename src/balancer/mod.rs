//! Team balancing
//!
//! This module partitions a selection of rated players into a fixed number of
//! teams and measures how evenly skill ended up spread across them.

pub mod order;
pub mod report;
pub mod sequential;
pub mod snake;

// Re-export commonly used types
pub use order::{DraftCursor, DraftOrder};
pub use report::{mean_pairwise_difference, team_average, BalanceReport};
pub use sequential::SequentialBalancer;
pub use snake::{DraftConfig, SnakeDraftBalancer};

use crate::error::{DraftError, Result};
use crate::types::{Player, ScoreBasis};
use serde::{Deserialize, Serialize};

/// Players split into teams, in team order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAssignment {
    teams: Vec<Vec<Player>>,
    score_basis: ScoreBasis,
}

impl TeamAssignment {
    pub fn new(teams: Vec<Vec<Player>>, score_basis: ScoreBasis) -> Self {
        Self { teams, score_basis }
    }

    pub fn teams(&self) -> &[Vec<Player>] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<Vec<Player>> {
        self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total players across every team
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Vec::len).sum()
    }

    /// Basis the players were ranked by
    pub fn score_basis(&self) -> ScoreBasis {
        self.score_basis
    }

    /// Balance metrics under the same basis the draft used
    pub fn report(&self) -> BalanceReport {
        BalanceReport::from_teams(&self.teams, self.score_basis)
    }
}

/// Trait for team balancing algorithms
pub trait TeamBalancer: Send + Sync {
    /// Short identifier for logs and metrics
    fn name(&self) -> &'static str;

    /// Basis used to rank players
    fn score_basis(&self) -> ScoreBasis;

    /// Split `players` into `team_count` teams
    ///
    /// Fails with [`DraftError::InsufficientPlayers`] when there are fewer
    /// players than teams. The input slice is never reordered.
    fn balance(&self, players: &[Player], team_count: usize) -> Result<TeamAssignment>;
}

/// Reject inputs no balancer can partition
pub(crate) fn check_preconditions(players: &[Player], team_count: usize) -> Result<()> {
    if team_count == 0 {
        return Err(DraftError::Validation {
            reason: "team count must be at least 1".to_string(),
        }
        .into());
    }

    if players.len() < team_count {
        return Err(DraftError::InsufficientPlayers {
            available: players.len(),
            requested: team_count,
        }
        .into());
    }

    Ok(())
}

/// Copy of `players` ranked by score, highest first; ties keep input order
pub(crate) fn ranked(players: &[Player], basis: ScoreBasis) -> Vec<Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by(|a, b| b.score(basis).total_cmp(&a.score(basis)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillProfile;

    fn player(id: i64, rating: u8) -> Player {
        Player::new(id, format!("Player {}", id), None, SkillProfile::uniform(rating))
    }

    #[test]
    fn test_preconditions() {
        let players = vec![player(1, 5), player(2, 6)];

        assert!(check_preconditions(&players, 2).is_ok());

        let err = check_preconditions(&players, 3).unwrap_err();
        match err.downcast_ref::<DraftError>() {
            Some(DraftError::InsufficientPlayers {
                available,
                requested,
            }) => {
                assert_eq!(*available, 2);
                assert_eq!(*requested, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err = check_preconditions(&players, 0).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DraftError>(),
            Some(DraftError::Validation { .. })
        ));
    }

    #[test]
    fn test_ranked_is_stable_and_descending() {
        let players = vec![player(1, 5), player(2, 8), player(3, 5), player(4, 8)];
        let ids: Vec<_> = ranked(&players, ScoreBasis::Stored)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_assignment_counts() {
        let assignment = TeamAssignment::new(
            vec![vec![player(1, 5), player(2, 6)], vec![player(3, 7)]],
            ScoreBasis::Stored,
        );
        assert_eq!(assignment.team_count(), 2);
        assert_eq!(assignment.player_count(), 3);
        assert_eq!(assignment.report().team_averages, vec![5.5, 7.0]);
    }
}

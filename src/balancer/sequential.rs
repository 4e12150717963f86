//! Sequential chunking balancer
//!
//! Ranks players and cuts the list into consecutive groups, so the first team
//! gets the strongest players. This is the baseline the snake draft is
//! measured against; it is not meant to produce fair teams.

use crate::balancer::{check_preconditions, ranked, TeamAssignment, TeamBalancer};
use crate::error::Result;
use crate::types::{Player, ScoreBasis};

#[derive(Debug, Clone, Default)]
pub struct SequentialBalancer {
    score_basis: ScoreBasis,
}

impl SequentialBalancer {
    pub fn new(score_basis: ScoreBasis) -> Self {
        Self { score_basis }
    }
}

impl TeamBalancer for SequentialBalancer {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn score_basis(&self) -> ScoreBasis {
        self.score_basis
    }

    fn balance(&self, players: &[Player], team_count: usize) -> Result<TeamAssignment> {
        check_preconditions(players, team_count)?;

        let base = players.len() / team_count;
        let extra = players.len() % team_count;

        let mut remaining = ranked(players, self.score_basis).into_iter();
        let teams = (0..team_count)
            .map(|i| {
                let size = if i < extra { base + 1 } else { base };
                remaining.by_ref().take(size).collect()
            })
            .collect();

        Ok(TeamAssignment::new(teams, self.score_basis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillProfile;

    fn roster(ratings: &[u8]) -> Vec<Player> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Player::new(
                    i as i64 + 1,
                    format!("Player {}", i + 1),
                    None,
                    SkillProfile::uniform(*r),
                )
            })
            .collect()
    }

    #[test]
    fn test_chunks_ranked_list() {
        let players = roster(&[5, 9, 7, 8, 6]);
        let assignment = SequentialBalancer::default().balance(&players, 2).unwrap();

        let ids: Vec<Vec<i64>> = assignment
            .teams()
            .iter()
            .map(|t| t.iter().map(|p| p.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![2, 4, 3], vec![5, 1]]);
    }

    #[test]
    fn test_sizes_differ_by_at_most_one() {
        let players = roster(&[5, 9, 7, 8, 6, 4, 3]);
        let assignment = SequentialBalancer::default().balance(&players, 3).unwrap();
        let sizes: Vec<_> = assignment.teams().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 2, 2]);
    }
}

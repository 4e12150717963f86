//! Snake draft balancer
//!
//! Players are ranked by score and handed out one at a time following a
//! [`DraftOrder`], so every team takes turns at picking from the top of the
//! remaining pool.

use crate::balancer::order::DraftOrder;
use crate::balancer::{check_preconditions, ranked, TeamAssignment, TeamBalancer};
use crate::error::Result;
use crate::types::{Player, ScoreBasis};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the snake draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftConfig {
    pub order: DraftOrder,
    pub score_basis: ScoreBasis,
}

#[derive(Debug, Clone, Default)]
pub struct SnakeDraftBalancer {
    config: DraftConfig,
}

impl SnakeDraftBalancer {
    pub fn new(config: DraftConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }
}

impl TeamBalancer for SnakeDraftBalancer {
    fn name(&self) -> &'static str {
        "snake_draft"
    }

    fn score_basis(&self) -> ScoreBasis {
        self.config.score_basis
    }

    fn balance(&self, players: &[Player], team_count: usize) -> Result<TeamAssignment> {
        check_preconditions(players, team_count)?;

        let mut teams: Vec<Vec<Player>> = vec![Vec::new(); team_count];
        let picks = self.config.order.cursor(team_count);

        for (player, team_index) in ranked(players, self.config.score_basis)
            .into_iter()
            .zip(picks)
        {
            teams[team_index].push(player);
        }

        debug!(
            "Drafted {} players into {} teams ({} order, {} scores)",
            players.len(),
            team_count,
            self.config.order,
            self.config.score_basis
        );

        Ok(TeamAssignment::new(teams, self.config.score_basis))
    }
}

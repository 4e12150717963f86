//! Team draft requests
//!
//! Resolves a player selection against the roster, runs the configured
//! balancer and shapes the result for display: team labels and averages
//! rounded to the configured number of decimals.

use crate::balancer::BalanceReport;
use crate::error::{DraftError, Result};
use crate::service::app::AppState;
use crate::types::{Player, PlayerId, ScoreBasis};
use crate::utils::{current_timestamp, generate_draft_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

/// Request to split players into teams
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    /// Players to draft; the whole roster when absent
    #[serde(default)]
    pub player_ids: Option<Vec<PlayerId>>,
    /// Number of teams; the configured default when absent
    #[serde(default)]
    pub team_count: Option<usize>,
}

/// One drafted team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftedTeam {
    pub label: String,
    pub average_score: f64,
    pub players: Vec<Player>,
}

/// Outcome of a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResult {
    pub draft_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub balancer: String,
    pub score_basis: ScoreBasis,
    pub teams: Vec<DraftedTeam>,
    pub average_difference: f64,
}

impl DraftResult {
    /// Combine drafted teams with their report, labelling teams 1..=k
    pub fn from_teams(
        balancer: &str,
        score_basis: ScoreBasis,
        teams: Vec<Vec<Player>>,
        report: &BalanceReport,
        label_prefix: &str,
    ) -> Self {
        let teams = teams
            .into_iter()
            .zip(report.team_averages.iter())
            .enumerate()
            .map(|(i, (players, average))| DraftedTeam {
                label: format!("{} {}", label_prefix, i + 1),
                average_score: *average,
                players,
            })
            .collect();

        Self {
            draft_id: generate_draft_id(),
            generated_at: current_timestamp(),
            balancer: balancer.to_string(),
            score_basis,
            teams,
            average_difference: report.average_difference,
        }
    }
}

/// Drop repeated ids, keeping the first occurrence
fn unique_ids(ids: Vec<PlayerId>) -> Vec<PlayerId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

impl AppState {
    /// Draft teams from a selection of roster players
    pub async fn draft_teams(&self, request: DraftRequest) -> Result<DraftResult> {
        match self.run_draft(request).await {
            Ok(result) => Ok(result),
            Err(e) => {
                let outcome = match e.downcast_ref::<DraftError>() {
                    Some(err) if err.is_client_error() => "rejected",
                    Some(DraftError::PlayerNotFound { .. }) => "rejected",
                    _ => "error",
                };
                warn!("Draft {}: {}", outcome, e);
                self.metrics().record_draft_failure(outcome);
                Err(e)
            }
        }
    }

    async fn run_draft(&self, request: DraftRequest) -> Result<DraftResult> {
        let settings = &self.config().teams;

        let team_count = request.team_count.unwrap_or(settings.default_team_count);
        if team_count == 0 || team_count > settings.max_team_count {
            return Err(DraftError::InvalidTeamCount {
                requested: team_count,
                max: settings.max_team_count,
            }
            .into());
        }

        let roster = self.roster();
        let players = match request.player_ids {
            Some(ids) => roster.get_players(&unique_ids(ids)).await?,
            None => roster.list_players().await?,
        };

        let balancer = self.balancer();
        let timer = self.metrics().start_timer();
        let assignment = balancer.balance(&players, team_count)?;
        let duration = timer.stop();

        let report = assignment.report();
        self.metrics().record_draft(
            team_count,
            players.len(),
            report.average_difference,
            duration,
        );

        let rounded = report.rounded(settings.display_decimals);
        let result = DraftResult::from_teams(
            balancer.name(),
            assignment.score_basis(),
            assignment.into_teams(),
            &rounded,
            &settings.label_prefix,
        );

        info!(
            "Draft {}: {} players into {} teams, average difference {}",
            result.draft_id,
            players.len(),
            team_count,
            result.average_difference
        );

        Ok(result)
    }
}

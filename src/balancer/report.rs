//! Balance metrics for a team assignment
//!
//! A report holds each team's average score and the mean absolute difference
//! over every pair of team averages. Values are kept unrounded;
//! [`BalanceReport::rounded`] applies one granularity to the whole report.

use crate::types::{Player, ScoreBasis};
use crate::utils::{mean, round_to, score_difference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Average score per team, in team order
    pub team_averages: Vec<f64>,
    /// Mean absolute pairwise difference between team averages
    pub average_difference: f64,
}

impl BalanceReport {
    pub fn from_teams(teams: &[Vec<Player>], basis: ScoreBasis) -> Self {
        let team_averages: Vec<f64> = teams.iter().map(|t| team_average(t, basis)).collect();
        let average_difference = mean_pairwise_difference(&team_averages);

        Self {
            team_averages,
            average_difference,
        }
    }

    /// Same report with every value rounded to `decimals` places
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            team_averages: self
                .team_averages
                .iter()
                .map(|avg| round_to(*avg, decimals))
                .collect(),
            average_difference: round_to(self.average_difference, decimals),
        }
    }

    /// Spread between the strongest and weakest team
    pub fn max_difference(&self) -> f64 {
        if self.team_averages.is_empty() {
            return 0.0;
        }
        let max = self.team_averages.iter().cloned().fold(f64::MIN, f64::max);
        let min = self.team_averages.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    }
}

/// Mean score across a team; an empty team averages zero
pub fn team_average(team: &[Player], basis: ScoreBasis) -> f64 {
    let scores: Vec<f64> = team.iter().map(|p| p.score(basis)).collect();
    mean(&scores)
}

/// Mean of `|a - b|` over all distinct pairs; zero for fewer than two values
pub fn mean_pairwise_difference(averages: &[f64]) -> f64 {
    if averages.len() <= 1 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in averages.iter().enumerate() {
        for b in &averages[i + 1..] {
            total += score_difference(*a, *b);
            pairs += 1;
        }
    }

    total / pairs as f64
}

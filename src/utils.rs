//! Utility functions for the team draft service

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique draft ID
pub fn generate_draft_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round to a number of decimal places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Calculate the absolute difference between two scores
pub fn score_difference(score1: f64, score2: f64) -> f64 {
    (score1 - score2).abs()
}

/// Mean of a slice, or zero when empty
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_draft_id();
        let id2 = generate_draft_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(7.428571, 1), 7.4);
        assert_eq!(round_to(7.428571, 0), 7.0);
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_score_difference() {
        assert_eq!(score_difference(8.0, 7.0), 1.0);
        assert_eq!(score_difference(7.0, 8.0), 1.0);
        assert_eq!(score_difference(7.5, 7.5), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[9.0, 7.0, 8.0]), 8.0);
    }
}

//! Error types for the team draft service
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

use crate::types::PlayerId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific roster and draft scenarios
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Not enough players ({available}) to create {requested} teams; select at least {requested} players")]
    InsufficientPlayers { available: usize, requested: usize },

    #[error("Invalid team count {requested}: must be between 1 and {max}")]
    InvalidTeamCount { requested: usize, max: usize },

    #[error("Invalid player data: {reason}")]
    Validation { reason: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    #[error("Roster is full: capacity of {capacity} players reached")]
    RosterFull { capacity: usize },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}

impl DraftError {
    /// Whether the error was caused by caller input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DraftError::InsufficientPlayers { .. }
                | DraftError::InvalidTeamCount { .. }
                | DraftError::Validation { .. }
                | DraftError::RosterFull { .. }
        )
    }
}

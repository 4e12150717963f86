//! Main application configuration
//!
//! This module defines the primary configuration structures for the team
//! draft service, including TOML file loading, environment variable loading
//! and validation.

use crate::balancer::{DraftConfig, DraftOrder};
use crate::types::ScoreBasis;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub roster: RosterSettings,
    pub teams: TeamSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Interface the HTTP server binds to
    pub host: String,
    /// Port for the roster API, health and metrics endpoints
    pub http_port: u16,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout_seconds: u64,
}

/// Roster storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSettings {
    /// Maximum number of players the roster holds
    pub max_players: usize,
    /// Load the sample roster on startup when the roster is empty
    pub seed_sample_players: bool,
}

/// Team drafting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSettings {
    /// Team count used when a request does not name one
    pub default_team_count: usize,
    /// Largest team count a request may ask for
    pub max_team_count: usize,
    /// Pick order of the snake draft
    pub draft_order: DraftOrder,
    /// Whether players are weighed by stored or recomputed averages
    pub score_basis: ScoreBasis,
    /// Decimal places for averages in team responses
    pub display_decimals: u32,
    /// Team labels are "<prefix> <n>"
    pub label_prefix: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "team-draft".to_string(),
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            http_port: 8080,
            shutdown_timeout_seconds: 30,
        }
    }
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            max_players: 500,
            seed_sample_players: false,
        }
    }
}

impl Default for TeamSettings {
    fn default() -> Self {
        Self {
            default_team_count: 2,
            max_team_count: 4,
            draft_order: DraftOrder::BoundaryReset,
            score_basis: ScoreBasis::Stored,
            display_decimals: 1,
            label_prefix: "Team".to_string(),
        }
    }
}

impl TeamSettings {
    /// Draft configuration for the balancer
    pub fn draft_config(&self) -> DraftConfig {
        DraftConfig {
            order: self.draft_order,
            score_basis: self.score_basis,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", name, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("Invalid TOML configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Override fields from environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(host) = env::var("HTTP_HOST") {
            self.service.host = host;
        }
        if let Ok(port) = env::var("HTTP_PORT") {
            self.service.http_port = parse_var("HTTP_PORT", &port)?;
        }
        if let Ok(timeout) = env::var("SHUTDOWN_TIMEOUT_SECONDS") {
            self.service.shutdown_timeout_seconds =
                parse_var("SHUTDOWN_TIMEOUT_SECONDS", &timeout)?;
        }

        // Roster settings
        if let Ok(max_players) = env::var("MAX_PLAYERS") {
            self.roster.max_players = parse_var("MAX_PLAYERS", &max_players)?;
        }
        if let Ok(seed) = env::var("SEED_SAMPLE_PLAYERS") {
            self.roster.seed_sample_players = parse_var("SEED_SAMPLE_PLAYERS", &seed)?;
        }

        // Team settings
        if let Ok(count) = env::var("DEFAULT_TEAM_COUNT") {
            self.teams.default_team_count = parse_var("DEFAULT_TEAM_COUNT", &count)?;
        }
        if let Ok(count) = env::var("MAX_TEAM_COUNT") {
            self.teams.max_team_count = parse_var("MAX_TEAM_COUNT", &count)?;
        }
        if let Ok(order) = env::var("DRAFT_ORDER") {
            self.teams.draft_order = parse_var("DRAFT_ORDER", &order)?;
        }
        if let Ok(basis) = env::var("SCORE_BASIS") {
            self.teams.score_basis = parse_var("SCORE_BASIS", &basis)?;
        }
        if let Ok(decimals) = env::var("DISPLAY_DECIMALS") {
            self.teams.display_decimals = parse_var("DISPLAY_DECIMALS", &decimals)?;
        }
        if let Ok(prefix) = env::var("TEAM_LABEL_PREFIX") {
            self.teams.label_prefix = prefix;
        }

        Ok(())
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.service.shutdown_timeout_seconds)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.http_port)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate server settings
    if config.service.http_port == 0 {
        return Err(anyhow!("HTTP port cannot be 0"));
    }
    if config.service.host.is_empty() {
        return Err(anyhow!("HTTP host cannot be empty"));
    }
    if config.service.shutdown_timeout_seconds == 0 {
        return Err(anyhow!("Shutdown timeout must be greater than 0"));
    }

    // Validate roster settings
    if config.roster.max_players == 0 {
        return Err(anyhow!("Max players must be greater than 0"));
    }

    // Validate team settings
    if config.teams.max_team_count == 0 {
        return Err(anyhow!("Max team count must be greater than 0"));
    }
    if config.teams.default_team_count == 0
        || config.teams.default_team_count > config.teams.max_team_count
    {
        return Err(anyhow!(
            "Default team count must be between 1 and {}",
            config.teams.max_team_count
        ));
    }
    if config.teams.display_decimals > 4 {
        return Err(anyhow!("Display decimals cannot exceed 4"));
    }
    if config.teams.label_prefix.trim().is_empty() {
        return Err(anyhow!("Team label prefix cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.http_port, 8080);
        assert_eq!(config.teams.default_team_count, 2);
        assert_eq!(config.teams.max_team_count, 4);
        assert_eq!(config.teams.draft_order, DraftOrder::BoundaryReset);
        assert_eq!(config.teams.score_basis, ScoreBasis::Stored);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [service]
            http_port = 9090

            [teams]
            max_team_count = 6
            draft_order = "mirrored"
            score_basis = "raw"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.http_port, 9090);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.teams.max_team_count, 6);
        assert_eq!(config.teams.default_team_count, 2);
        assert_eq!(config.teams.draft_order, DraftOrder::Mirrored);
        assert_eq!(config.teams.score_basis, ScoreBasis::Raw);
        assert_eq!(config.roster.max_players, 500);
    }

    #[test]
    fn test_invalid_toml_values() {
        assert!(AppConfig::from_toml("[teams]\ndraft_order = \"random\"").is_err());
        assert!(AppConfig::from_toml("[service]\nlog_level = \"loud\"").is_err());
        assert!(AppConfig::from_toml("[teams]\ndefault_team_count = 5").is_err());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.service.http_port = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.roster.max_players = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.teams.default_team_count = 0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.teams.display_decimals = 9;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.teams.label_prefix = " ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_draft_config_from_settings() {
        let settings = TeamSettings {
            draft_order: DraftOrder::Mirrored,
            score_basis: ScoreBasis::Raw,
            ..Default::default()
        };
        let draft = settings.draft_config();
        assert_eq!(draft.order, DraftOrder::Mirrored);
        assert_eq!(draft.score_basis, ScoreBasis::Raw);
    }
}

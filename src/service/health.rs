//! Health checks for the team draft service
//!
//! Readiness and liveness probes plus a detailed report of component health
//! and roster/draft statistics.

use crate::service::app::AppState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

/// Fraction of roster capacity above which the roster store reports degraded
const ROSTER_CAPACITY_WARNING: f64 = 0.9;

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// Gauge value exported to Prometheus
    pub fn as_metric(&self) -> u8 {
        match self {
            HealthStatus::Healthy => 2,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 0,
        }
    }

    /// Combine with a component status, keeping the worse of the two
    fn merge(self, other: &HealthStatus) -> HealthStatus {
        match (self, other) {
            (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
            (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
            _ => HealthStatus::Healthy,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "✅ healthy"),
            HealthStatus::Degraded => write!(f, "⚠️  degraded"),
            HealthStatus::Unhealthy => write!(f, "❌ unhealthy"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Overall service status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Current timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Detailed component checks
    pub checks: Vec<ComponentCheck>,
    /// Service statistics
    pub stats: ServiceStats,
}

/// Individual component health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCheck {
    pub name: String,
    pub status: HealthStatus,
    /// Set when the component is not healthy
    pub message: Option<String>,
    pub duration_ms: u64,
}

/// Service statistics for health reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Players on the roster
    pub players: usize,
    /// Roster capacity
    pub max_players: usize,
    /// Successful drafts since service start
    pub drafts_completed: u64,
    /// Seconds since service start
    pub uptime_seconds: u64,
    pub uptime_info: String,
}

impl HealthCheck {
    /// Perform a full health check of the service
    pub async fn check(app_state: Arc<AppState>) -> Result<Self> {
        let service_check = Self::check_service_running(&app_state).await;
        let roster_check = Self::check_roster_store(&app_state).await;

        let status = [&service_check, &roster_check]
            .iter()
            .fold(HealthStatus::Healthy, |acc, check| acc.merge(&check.status));

        app_state.metrics().update_health_status(status.as_metric());

        let stats = Self::gather_service_stats(&app_state).await;

        Ok(HealthCheck {
            status,
            service: app_state.config().service.name.clone(),
            version: crate::VERSION.to_string(),
            timestamp: chrono::Utc::now(),
            checks: vec![service_check, roster_check],
            stats,
        })
    }

    /// Liveness: the service is running
    pub async fn liveness_check(app_state: Arc<AppState>) -> Result<HealthStatus> {
        if app_state.is_running().await {
            Ok(HealthStatus::Healthy)
        } else {
            Ok(HealthStatus::Unhealthy)
        }
    }

    /// Readiness: the service is running and the roster answers
    pub async fn readiness_check(app_state: Arc<AppState>) -> Result<HealthStatus> {
        if !app_state.is_running().await {
            return Ok(HealthStatus::Unhealthy);
        }

        Ok(Self::check_roster_store(&app_state).await.status)
    }

    async fn check_service_running(app_state: &AppState) -> ComponentCheck {
        let start = std::time::Instant::now();

        let (status, message) = if app_state.is_running().await {
            (HealthStatus::Healthy, None)
        } else {
            (
                HealthStatus::Unhealthy,
                Some("Service is not running".to_string()),
            )
        };

        ComponentCheck {
            name: "service_running".to_string(),
            status,
            message,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Roster store answers, degraded when close to capacity
    async fn check_roster_store(app_state: &AppState) -> ComponentCheck {
        let start = std::time::Instant::now();
        let capacity = app_state.config().roster.max_players;

        let (status, message) = match app_state.roster().player_count().await {
            Ok(count) if count as f64 >= capacity as f64 * ROSTER_CAPACITY_WARNING => (
                HealthStatus::Degraded,
                Some(format!("Roster near capacity ({}/{})", count, capacity)),
            ),
            Ok(_) => (HealthStatus::Healthy, None),
            Err(e) => {
                error!("Roster store check failed: {}", e);
                (
                    HealthStatus::Unhealthy,
                    Some(format!("Roster store unavailable: {}", e)),
                )
            }
        };

        app_state
            .metrics()
            .update_component_health("roster_store", status != HealthStatus::Unhealthy);

        ComponentCheck {
            name: "roster_store".to_string(),
            status,
            message,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    async fn gather_service_stats(app_state: &AppState) -> ServiceStats {
        let players = match app_state.roster().player_count().await {
            Ok(count) => count,
            Err(e) => {
                debug!("Failed to count players for health check: {}", e);
                0
            }
        };
        let uptime = app_state.uptime();

        ServiceStats {
            players,
            max_players: app_state.config().roster.max_players,
            drafts_completed: app_state.metrics().drafts_completed(),
            uptime_seconds: uptime.as_secs(),
            uptime_info: format!("Up {}s", uptime.as_secs()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize health check: {}", e))
    }
}

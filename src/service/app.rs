//! Main application state and service coordination
//!
//! This module contains the production AppState that wires the roster store,
//! the team balancer and metrics together, and runs background maintenance.

use crate::balancer::{SnakeDraftBalancer, TeamBalancer};
use crate::config::AppConfig;
use crate::metrics::MetricsCollector;
use crate::roster::{seed_if_empty, InMemoryRosterStore, RosterStore};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, info, warn};

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Service initialization error: {message}")]
    Initialization { message: String },

    #[error("Background task error: {message}")]
    BackgroundTask { message: String },
}

/// Interval between metrics refreshes
const METRICS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Shared application state
pub struct AppState {
    /// Service configuration
    config: AppConfig,

    /// Player roster
    roster: Arc<dyn RosterStore>,

    /// Team balancing algorithm
    balancer: Arc<dyn TeamBalancer>,

    /// Prometheus metrics
    metrics: Arc<MetricsCollector>,

    /// Background task handles
    background_tasks: Mutex<Vec<JoinHandle<()>>>,

    /// Service status
    is_running: Arc<RwLock<bool>>,

    /// When the state was created
    started_at: Instant,
}

impl AppState {
    /// Initialize the application with all dependencies
    pub async fn new(config: AppConfig) -> Result<Self, ServiceError> {
        info!("Initializing {} service", config.service.name);
        info!(
            "Configuration: max_players={}, max_teams={}, order={}, basis={}",
            config.roster.max_players,
            config.teams.max_team_count,
            config.teams.draft_order,
            config.teams.score_basis
        );

        let metrics = Arc::new(MetricsCollector::new().map_err(|e| {
            ServiceError::Initialization {
                message: format!("Failed to create metrics collector: {}", e),
            }
        })?);

        let roster: Arc<dyn RosterStore> =
            Arc::new(InMemoryRosterStore::new(config.roster.max_players));

        if config.roster.seed_sample_players {
            seed_if_empty(roster.as_ref())
                .await
                .map_err(|e| ServiceError::Initialization {
                    message: format!("Failed to seed sample roster: {}", e),
                })?;
        }

        let balancer: Arc<dyn TeamBalancer> =
            Arc::new(SnakeDraftBalancer::new(config.teams.draft_config()));

        Ok(Self::with_components(config, roster, balancer, metrics))
    }

    /// Assemble state from explicit components
    pub fn with_components(
        config: AppConfig,
        roster: Arc<dyn RosterStore>,
        balancer: Arc<dyn TeamBalancer>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            config,
            roster,
            balancer,
            metrics,
            background_tasks: Mutex::new(Vec::new()),
            is_running: Arc::new(RwLock::new(false)),
            started_at: Instant::now(),
        }
    }

    /// Mark the service running and start background maintenance
    pub async fn start(&self) -> Result<(), ServiceError> {
        info!("Starting {} service", self.config.service.name);

        *self.is_running.write().await = true;
        self.refresh_metrics().await;
        self.start_background_tasks().await;

        info!("✅ {} service started successfully", self.config.service.name);
        Ok(())
    }

    /// Perform graceful shutdown
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        info!("Starting graceful shutdown of {}", self.config.service.name);

        *self.is_running.write().await = false;
        self.stop_background_tasks().await;

        let players = self
            .roster
            .player_count()
            .await
            .map_err(|e| ServiceError::BackgroundTask {
                message: format!("Failed to get final roster size: {}", e),
            })?;

        info!(
            "Final service statistics: players={}, drafts={}",
            players,
            self.metrics.drafts_completed()
        );
        info!("✅ {} shutdown completed", self.config.service.name);

        Ok(())
    }

    /// Get service configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the roster store
    pub fn roster(&self) -> Arc<dyn RosterStore> {
        self.roster.clone()
    }

    /// Get the team balancer
    pub fn balancer(&self) -> Arc<dyn TeamBalancer> {
        self.balancer.clone()
    }

    /// Get the metrics collector
    pub fn metrics(&self) -> Arc<MetricsCollector> {
        self.metrics.clone()
    }

    /// Check if service is running
    pub async fn is_running(&self) -> bool {
        *self.is_running.read().await
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Refresh roster size and uptime gauges
    pub async fn refresh_metrics(&self) {
        self.metrics.update_uptime(self.uptime());
        match self.roster.player_count().await {
            Ok(count) => {
                self.metrics.update_roster_size(count);
                self.metrics.update_component_health("roster_store", true);
            }
            Err(e) => {
                warn!("Failed to read roster size for metrics: {}", e);
                self.metrics.update_component_health("roster_store", false);
            }
        }
    }

    /// Start background maintenance tasks
    async fn start_background_tasks(&self) {
        info!(
            "Starting metrics refresh task ({}s interval)...",
            METRICS_REFRESH_INTERVAL.as_secs()
        );

        let task = {
            let roster = self.roster.clone();
            let metrics = self.metrics.clone();
            let is_running = self.is_running.clone();
            let started_at = self.started_at;

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(METRICS_REFRESH_INTERVAL);
                info!("Metrics refresh task started");

                while *is_running.read().await {
                    interval.tick().await;

                    metrics.update_uptime(started_at.elapsed());
                    match roster.player_count().await {
                        Ok(count) => {
                            debug!("Updating metrics - roster players: {}", count);
                            metrics.update_roster_size(count);
                            metrics.update_component_health("roster_store", true);
                        }
                        Err(e) => {
                            warn!("Failed to read roster size for metrics: {}", e);
                            metrics.update_component_health("roster_store", false);
                        }
                    }
                }

                info!("Metrics refresh task stopped");
            })
        };

        self.background_tasks.lock().await.push(task);
    }

    /// Stop all background tasks
    async fn stop_background_tasks(&self) {
        let mut tasks = self.background_tasks.lock().await;
        let task_count = tasks.len();
        if task_count == 0 {
            info!("No background tasks to stop");
            return;
        }

        info!("Stopping {} background tasks...", task_count);
        for (i, task) in tasks.drain(..).enumerate() {
            debug!("Aborting background task {}/{}", i + 1, task_count);
            task.abort();
        }

        info!("✅ All {} background tasks stopped", task_count);
    }
}

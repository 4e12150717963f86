//! Metrics collection using Prometheus
//!
//! This module provides metrics collection for the team draft service using
//! Prometheus metrics scoped to a private registry.

use anyhow::Result;
use prometheus::{
    Gauge, Histogram, HistogramOpts, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the team draft service
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Service-level metrics
    service_metrics: ServiceMetrics,

    /// Roster-related metrics
    roster_metrics: RosterMetrics,

    /// Draft-related metrics
    draft_metrics: DraftMetrics,
}

/// Service-level metrics
#[derive(Clone)]
pub struct ServiceMetrics {
    /// Service uptime in seconds
    pub uptime_seconds: IntGauge,

    /// Health check status (0=unhealthy, 1=degraded, 2=healthy)
    pub health_status: IntGauge,

    /// Component health status
    pub component_health: IntGaugeVec,
}

/// Roster-related metrics
#[derive(Clone)]
pub struct RosterMetrics {
    /// Players currently on the roster
    pub players: IntGauge,

    /// Roster operations by operation and outcome
    pub operations_total: IntCounterVec,
}

/// Draft-related metrics
#[derive(Clone)]
pub struct DraftMetrics {
    /// Drafts requested, by outcome
    pub drafts_total: IntCounterVec,

    /// Time spent balancing a selection
    pub draft_duration_seconds: Histogram,

    /// Team counts requested
    pub team_count: Histogram,

    /// Players per draft
    pub players_per_draft: Histogram,

    /// Mean pairwise difference of the most recent draft
    pub last_average_difference: Gauge,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let service_metrics = ServiceMetrics::new(&registry)?;
        let roster_metrics = RosterMetrics::new(&registry)?;
        let draft_metrics = DraftMetrics::new(&registry)?;

        Ok(Self {
            registry,
            service_metrics,
            roster_metrics,
            draft_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    /// Get service metrics
    pub fn service(&self) -> &ServiceMetrics {
        &self.service_metrics
    }

    /// Get roster metrics
    pub fn roster(&self) -> &RosterMetrics {
        &self.roster_metrics
    }

    /// Get draft metrics
    pub fn draft(&self) -> &DraftMetrics {
        &self.draft_metrics
    }

    /// Record a roster operation ("create", "update", "delete", ...)
    pub fn record_roster_operation(&self, operation: &str, success: bool) {
        let status = if success { "success" } else { "error" };
        self.roster_metrics
            .operations_total
            .with_label_values(&[operation, status])
            .inc();
    }

    /// Update the roster size gauge
    pub fn update_roster_size(&self, players: usize) {
        self.roster_metrics.players.set(players as i64);
    }

    /// Record a completed draft
    pub fn record_draft(
        &self,
        team_count: usize,
        player_count: usize,
        average_difference: f64,
        duration: Duration,
    ) {
        self.draft_metrics
            .drafts_total
            .with_label_values(&["success"])
            .inc();
        self.draft_metrics
            .draft_duration_seconds
            .observe(duration.as_secs_f64());
        self.draft_metrics.team_count.observe(team_count as f64);
        self.draft_metrics
            .players_per_draft
            .observe(player_count as f64);
        self.draft_metrics
            .last_average_difference
            .set(average_difference);
    }

    /// Record a draft rejected before balancing ("rejected") or failing inside ("error")
    pub fn record_draft_failure(&self, outcome: &str) {
        self.draft_metrics
            .drafts_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Number of successful drafts since start
    pub fn drafts_completed(&self) -> u64 {
        self.draft_metrics
            .drafts_total
            .with_label_values(&["success"])
            .get()
    }

    /// Update health status
    pub fn update_health_status(&self, status: u8) {
        self.service_metrics.health_status.set(status as i64);
    }

    /// Update component health
    pub fn update_component_health(&self, component: &str, healthy: bool) {
        let status = if healthy { 1 } else { 0 };
        self.service_metrics
            .component_health
            .with_label_values(&[component])
            .set(status);
    }

    /// Update uptime gauge
    pub fn update_uptime(&self, uptime: Duration) {
        self.service_metrics
            .uptime_seconds
            .set(uptime.as_secs() as i64);
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl ServiceMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let uptime_seconds =
            IntGauge::new("team_draft_uptime_seconds", "Service uptime in seconds")?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        let health_status = IntGauge::new(
            "team_draft_health_status",
            "Health status (0=unhealthy, 1=degraded, 2=healthy)",
        )?;
        registry.register(Box::new(health_status.clone()))?;

        let component_health = IntGaugeVec::new(
            Opts::new("team_draft_component_health", "Component health status"),
            &["component"],
        )?;
        registry.register(Box::new(component_health.clone()))?;

        Ok(Self {
            uptime_seconds,
            health_status,
            component_health,
        })
    }
}

impl RosterMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let players = IntGauge::new("team_draft_roster_players", "Players on the roster")?;
        registry.register(Box::new(players.clone()))?;

        let operations_total = IntCounterVec::new(
            Opts::new(
                "team_draft_roster_operations_total",
                "Total roster operations",
            ),
            &["operation", "status"],
        )?;
        registry.register(Box::new(operations_total.clone()))?;

        Ok(Self {
            players,
            operations_total,
        })
    }
}

impl DraftMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let drafts_total = IntCounterVec::new(
            Opts::new("team_draft_drafts_total", "Total team drafts requested"),
            &["outcome"],
        )?;
        registry.register(Box::new(drafts_total.clone()))?;

        let draft_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "team_draft_draft_duration_seconds",
                "Time spent balancing teams",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1]),
        )?;
        registry.register(Box::new(draft_duration_seconds.clone()))?;

        let team_count = Histogram::with_opts(
            HistogramOpts::new("team_draft_team_count", "Teams requested per draft")
                .buckets(vec![1.0, 2.0, 3.0, 4.0, 6.0, 8.0]),
        )?;
        registry.register(Box::new(team_count.clone()))?;

        let players_per_draft = Histogram::with_opts(
            HistogramOpts::new("team_draft_players_per_draft", "Players drafted per request")
                .buckets(vec![2.0, 6.0, 12.0, 24.0, 48.0, 96.0]),
        )?;
        registry.register(Box::new(players_per_draft.clone()))?;

        let last_average_difference = Gauge::new(
            "team_draft_last_average_difference",
            "Mean pairwise difference between team averages in the last draft",
        )?;
        registry.register(Box::new(last_average_difference.clone()))?;

        Ok(Self {
            drafts_total,
            draft_duration_seconds,
            team_count,
            players_per_draft,
            last_average_difference,
        })
    }
}

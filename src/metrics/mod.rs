//! Metrics and monitoring for the team-draft service
//!
//! Prometheus metrics for roster operations and team drafts, exported by the
//! HTTP server at `/metrics`.

pub mod collector;

pub use collector::{DraftMetrics, MetricsCollector, MetricsTimer, RosterMetrics, ServiceMetrics};

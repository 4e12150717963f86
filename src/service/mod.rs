//! Service layer for the team draft service
//!
//! This module contains the application state, draft orchestration, health
//! reporting and background task management.

pub mod app;
pub mod draft;
pub mod health;

pub use app::{AppState, ServiceError};
pub use draft::{DraftRequest, DraftResult, DraftedTeam};
pub use health::{ComponentCheck, HealthCheck, HealthStatus, ServiceStats};

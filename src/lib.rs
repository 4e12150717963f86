//! Team Draft - balanced team generation for a volleyball roster
//!
//! This crate keeps a roster of players rated across seven skill dimensions
//! and splits a selection of them into balanced teams with a snake draft,
//! served over HTTP with health checks and Prometheus metrics.

pub mod api;
pub mod balancer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod roster;
pub mod service;
pub mod skills;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{DraftError, Result};
pub use types::*;

// Re-export key components
pub use balancer::{
    BalanceReport, DraftOrder, SequentialBalancer, SnakeDraftBalancer, TeamAssignment,
    TeamBalancer,
};
pub use roster::{InMemoryRosterStore, RosterStore};
pub use service::{AppState, DraftRequest, DraftResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

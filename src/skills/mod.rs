//! Skill aggregation
//!
//! Collapses a player's per-dimension ratings into the single score used as
//! the balancing weight.

pub mod aggregator;

pub use aggregator::{average_score, display_average_score, stored_average_score};

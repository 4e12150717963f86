//! Roster management
//!
//! This module defines the player store interface, its in-memory
//! implementation, input validation and the bundled sample roster.

pub mod seed;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use seed::{sample_players, seed_if_empty};
pub use storage::{InMemoryRosterStore, RosterStore};
pub use validation::{validate_input, validate_name, validate_patch, validate_skills};

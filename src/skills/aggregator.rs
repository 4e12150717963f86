//! Skill profile aggregation
//!
//! The aggregate is the plain arithmetic mean of every dimension. Stored
//! scores round to the nearest integer, display scores to one decimal place;
//! both round half away from zero.

use crate::types::{SkillDimension, SkillProfile};
use crate::utils::round_to;

/// Decimal places used when a profile average is shown to users
pub const DISPLAY_DECIMALS: u32 = 1;

/// Unrounded mean of all skill ratings
pub fn average_score(skills: &SkillProfile) -> f64 {
    let sum: u32 = skills.ratings().map(|(_, rating)| u32::from(rating)).sum();
    f64::from(sum) / SkillDimension::ALL.len() as f64
}

/// Average as written to a player record
pub fn stored_average_score(skills: &SkillProfile) -> i32 {
    average_score(skills).round() as i32
}

/// Average as shown alongside a player
pub fn display_average_score(skills: &SkillProfile) -> f64 {
    round_to(average_score(skills), DISPLAY_DECIMALS)
}

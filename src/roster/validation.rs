//! Player input validation
//!
//! Names need at least two characters and every skill rating must lie in
//! `1..=10`. Missing or non-integer ratings are already rejected when the
//! request body is deserialized.

use crate::error::{DraftError, Result};
use crate::types::{
    PlayerInput, PlayerPatch, SkillProfile, MAX_SKILL_RATING, MIN_NAME_LENGTH, MIN_SKILL_RATING,
};

pub fn validate_name(name: &str) -> Result<()> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(DraftError::Validation {
            reason: format!("name must have at least {} characters", MIN_NAME_LENGTH),
        }
        .into());
    }
    Ok(())
}

pub fn validate_skills(skills: &SkillProfile) -> Result<()> {
    let out_of_range: Vec<String> = skills
        .ratings()
        .filter(|(_, rating)| !(MIN_SKILL_RATING..=MAX_SKILL_RATING).contains(rating))
        .map(|(dimension, rating)| format!("{}={}", dimension, rating))
        .collect();

    if !out_of_range.is_empty() {
        return Err(DraftError::Validation {
            reason: format!(
                "skill ratings must be between {} and {}: {}",
                MIN_SKILL_RATING,
                MAX_SKILL_RATING,
                out_of_range.join(", ")
            ),
        }
        .into());
    }
    Ok(())
}

pub fn validate_input(input: &PlayerInput) -> Result<()> {
    validate_name(&input.name)?;
    validate_skills(&input.skills)
}

pub fn validate_patch(patch: &PlayerPatch) -> Result<()> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(skills) = &patch.skills {
        validate_skills(skills)?;
    }
    Ok(())
}

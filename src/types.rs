//! Common types used throughout the team draft service

use crate::skills::aggregator;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for roster players
pub type PlayerId = i64;

/// Lowest rating a skill dimension accepts
pub const MIN_SKILL_RATING: u8 = 1;

/// Highest rating a skill dimension accepts
pub const MAX_SKILL_RATING: u8 = 10;

/// Minimum number of characters in a player name
pub const MIN_NAME_LENGTH: usize = 2;

/// The fixed set of rated skill dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillDimension {
    #[serde(rename = "saque")]
    Serve,
    #[serde(rename = "recepcao")]
    Reception,
    #[serde(rename = "passe")]
    Passing,
    #[serde(rename = "ataque")]
    Attack,
    #[serde(rename = "bloqueio")]
    Block,
    #[serde(rename = "defesa")]
    Defense,
    #[serde(rename = "mobilidade")]
    Mobility,
}

impl SkillDimension {
    /// Every dimension, in record order
    pub const ALL: [SkillDimension; 7] = [
        SkillDimension::Serve,
        SkillDimension::Reception,
        SkillDimension::Passing,
        SkillDimension::Attack,
        SkillDimension::Block,
        SkillDimension::Defense,
        SkillDimension::Mobility,
    ];

    /// Field name used in persisted records
    pub fn field_name(&self) -> &'static str {
        match self {
            SkillDimension::Serve => "saque",
            SkillDimension::Reception => "recepcao",
            SkillDimension::Passing => "passe",
            SkillDimension::Attack => "ataque",
            SkillDimension::Block => "bloqueio",
            SkillDimension::Defense => "defesa",
            SkillDimension::Mobility => "mobilidade",
        }
    }
}

impl std::fmt::Display for SkillDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Per-dimension skill ratings for a player
///
/// Every field must be present when deserializing, so a record missing a
/// dimension never reaches the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    #[serde(rename = "saque")]
    pub serve: u8,
    #[serde(rename = "recepcao")]
    pub reception: u8,
    #[serde(rename = "passe")]
    pub passing: u8,
    #[serde(rename = "ataque")]
    pub attack: u8,
    #[serde(rename = "bloqueio")]
    pub block: u8,
    #[serde(rename = "defesa")]
    pub defense: u8,
    #[serde(rename = "mobilidade")]
    pub mobility: u8,
}

impl SkillProfile {
    /// Profile with the same rating in every dimension
    pub fn uniform(rating: u8) -> Self {
        Self {
            serve: rating,
            reception: rating,
            passing: rating,
            attack: rating,
            block: rating,
            defense: rating,
            mobility: rating,
        }
    }

    /// Rating for a single dimension
    pub fn rating(&self, dimension: SkillDimension) -> u8 {
        match dimension {
            SkillDimension::Serve => self.serve,
            SkillDimension::Reception => self.reception,
            SkillDimension::Passing => self.passing,
            SkillDimension::Attack => self.attack,
            SkillDimension::Block => self.block,
            SkillDimension::Defense => self.defense,
            SkillDimension::Mobility => self.mobility,
        }
    }

    /// Iterate over (dimension, rating) pairs
    pub fn ratings(&self) -> impl Iterator<Item = (SkillDimension, u8)> + '_ {
        SkillDimension::ALL.iter().map(move |d| (*d, self.rating(*d)))
    }
}

/// Which score the balancer and reports weigh players by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    /// The integer average score stored on the player record
    #[default]
    Stored,
    /// The unrounded mean recomputed from the skill profile
    Raw,
}

impl std::fmt::Display for ScoreBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBasis::Stored => write!(f, "stored"),
            ScoreBasis::Raw => write!(f, "raw"),
        }
    }
}

impl std::str::FromStr for ScoreBasis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stored" => Ok(ScoreBasis::Stored),
            "raw" => Ok(ScoreBasis::Raw),
            other => Err(format!("unknown score basis: {}", other)),
        }
    }
}

/// Roster player record, in its persisted shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub photo_url: Option<String>,
    pub skills: SkillProfile,
    pub average_score: i32,
}

impl Player {
    /// Build a record, deriving the stored average from the profile
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        photo_url: Option<String>,
        skills: SkillProfile,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            photo_url: normalize_photo_url(photo_url),
            skills,
            average_score: aggregator::stored_average_score(&skills),
        }
    }

    /// Weight used for balancing under the given basis
    pub fn score(&self, basis: ScoreBasis) -> f64 {
        match basis {
            ScoreBasis::Stored => f64::from(self.average_score),
            ScoreBasis::Raw => aggregator::average_score(&self.skills),
        }
    }
}

/// Body for creating a player or fully replacing one
///
/// Any `averageScore` supplied by the client is ignored; it is always
/// recomputed from `skills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub skills: SkillProfile,
}

/// Body for a partial update
///
/// `photoUrl` distinguishes "absent" (keep) from `null` (clear).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub photo_url: Option<Option<String>>,
    #[serde(default)]
    pub skills: Option<SkillProfile>,
}

impl From<PlayerInput> for PlayerPatch {
    fn from(input: PlayerInput) -> Self {
        Self {
            name: Some(input.name),
            photo_url: Some(input.photo_url),
            skills: Some(input.skills),
        }
    }
}

impl PlayerPatch {
    /// Apply the patch, recomputing the stored average when skills change
    pub fn apply_to(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(photo_url) = self.photo_url {
            player.photo_url = normalize_photo_url(photo_url);
        }
        if let Some(skills) = self.skills {
            player.skills = skills;
            player.average_score = aggregator::stored_average_score(&skills);
        }
    }
}

/// Marks a present field as `Some`, including an explicit `null`
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Empty image references are stored as absent
fn normalize_photo_url(photo_url: Option<String>) -> Option<String> {
    photo_url.filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skills() -> SkillProfile {
        SkillProfile {
            serve: 7,
            reception: 6,
            passing: 7,
            attack: 8,
            block: 9,
            defense: 8,
            mobility: 7,
        }
    }

    #[test]
    fn test_player_serializes_to_record_shape() {
        let player = Player::new(1, "Marco Silva", None, sample_skills());
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Marco Silva");
        assert!(value["photoUrl"].is_null());
        assert_eq!(value["skills"]["saque"], 7);
        assert_eq!(value["skills"]["mobilidade"], 7);
        assert_eq!(value["averageScore"], 7);
    }

    #[test]
    fn test_skill_profile_requires_every_dimension() {
        let missing = serde_json::json!({
            "saque": 7, "recepcao": 6, "passe": 7, "ataque": 8,
            "bloqueio": 9, "defesa": 8
        });
        assert!(serde_json::from_value::<SkillProfile>(missing).is_err());
    }

    #[test]
    fn test_skill_profile_rejects_fractional_ratings() {
        let fractional = serde_json::json!({
            "saque": 7.5, "recepcao": 6, "passe": 7, "ataque": 8,
            "bloqueio": 9, "defesa": 8, "mobilidade": 7
        });
        assert!(serde_json::from_value::<SkillProfile>(fractional).is_err());
    }

    #[test]
    fn test_empty_photo_url_is_normalized() {
        let player = Player::new(1, "Ana", Some("  ".to_string()), sample_skills());
        assert_eq!(player.photo_url, None);
    }

    #[test]
    fn test_score_basis() {
        let player = Player::new(1, "Marco", None, sample_skills());
        assert_eq!(player.score(ScoreBasis::Stored), 7.0);
        assert!((player.score(ScoreBasis::Raw) - 52.0 / 7.0).abs() < 1e-9);
        assert_eq!("RAW".parse::<ScoreBasis>().unwrap(), ScoreBasis::Raw);
        assert!("median".parse::<ScoreBasis>().is_err());
    }

    #[test]
    fn test_patch_distinguishes_absent_and_null_photo() {
        let absent: PlayerPatch = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(absent.photo_url, None);

        let cleared: PlayerPatch = serde_json::from_str(r#"{"photoUrl": null}"#).unwrap();
        assert_eq!(cleared.photo_url, Some(None));
    }

    #[test]
    fn test_patch_recomputes_average() {
        let mut player = Player::new(1, "Marco", Some("a.png".to_string()), sample_skills());
        let patch = PlayerPatch {
            name: None,
            photo_url: Some(None),
            skills: Some(SkillProfile::uniform(3)),
        };
        patch.apply_to(&mut player);

        assert_eq!(player.name, "Marco");
        assert_eq!(player.photo_url, None);
        assert_eq!(player.average_score, 3);
    }

    #[test]
    fn test_dimension_iteration_order() {
        let names: Vec<_> = sample_skills()
            .ratings()
            .map(|(d, _)| d.field_name())
            .collect();
        assert_eq!(
            names,
            vec!["saque", "recepcao", "passe", "ataque", "bloqueio", "defesa", "mobilidade"]
        );
    }
}

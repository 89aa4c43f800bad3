use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Whether a skill is offered to others or wanted from them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Offer,
    Want,
}

impl SkillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Offer => "offer",
            SkillType::Want => "want",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown skill type: {0}")]
pub struct ParseSkillTypeError(String);

impl FromStr for SkillType {
    type Err = ParseSkillTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offer" => Ok(SkillType::Offer),
            "want" => Ok(SkillType::Want),
            other => Err(ParseSkillTypeError(other.to_string())),
        }
    }
}

/// A skill listed by a user, either offered or wanted
///
/// `level` stays a free string on purpose: unrecognized levels degrade to the
/// lowest-scoring bucket instead of failing (validation happens upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub level: String,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public identity of a skill's owner, as joined by the data layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOwner {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A candidate skill joined with its owner's public identity
///
/// Constructed per request by the data-access collaborator, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    #[serde(flatten)]
    pub skill: Skill,
    pub user: SkillOwner,
}

/// Optional filter/boost inputs for match scoring
///
/// `max_distance` and `availability` are accepted for wire compatibility but
/// referenced nowhere in scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchPreferences {
    #[serde(rename = "maxDistance", default)]
    pub max_distance: Option<u32>,
    #[serde(rename = "preferredLevels", default)]
    pub preferred_levels: Vec<String>,
    #[serde(rename = "preferredCategories", default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
}

/// Scored match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(rename = "skillId")]
    pub skill_id: String,
    #[serde(rename = "skillTitle")]
    pub skill_title: String,
    #[serde(rename = "skillCategory")]
    pub skill_category: String,
    #[serde(rename = "skillLevel")]
    pub skill_level: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Category frequency entry for match analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregated insights over a match batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchAnalysis {
    #[serde(rename = "topCategories")]
    pub top_categories: Vec<CategoryCount>,
    #[serde(rename = "averageCompatibility")]
    pub average_compatibility: f64,
    #[serde(rename = "skillGaps")]
    pub skill_gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Notification kinds surfaced to users
///
/// `NewMatch` and `SkillGap` are part of the declared contract but currently
/// have no emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    HighMatch,
    NewMatch,
    TrendingSkill,
    SkillGap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

/// Match notification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchNotification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
}

/// Additive scoring term weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub same_category: f64,
    pub related_category: f64,
    pub level_scale: f64,
    pub complementary_type: f64,
    pub recency: f64,
    pub preferred_category: f64,
    pub preferred_level: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            same_category: 40.0,
            related_category: 25.0,
            level_scale: 0.3,
            complementary_type: 20.0,
            recency: 10.0,
            preferred_category: 15.0,
            preferred_level: 10.0,
        }
    }
}

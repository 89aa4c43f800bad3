use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchAnalysis, MatchNotification, SkillMatch};

/// Full response payload for the enhanced matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<SkillMatch>,
    pub analysis: MatchAnalysis,
    pub notifications: Vec<MatchNotification>,
    #[serde(rename = "userStats")]
    pub user_stats: UserStats,
}

/// Per-user counters attached to a match report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "totalSkills")]
    pub total_skills: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "averageCompatibility")]
    pub average_compatibility: f64,
}

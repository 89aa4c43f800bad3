use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::MatchPreferences;

/// Request for enhanced match results
///
/// Mirrors the query contract of the HTTP collaborator: optional category and
/// level filters become single-entry preference lists, and `minScore` is an
/// extra cut applied on top of the fixed inclusion threshold.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnhancedMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default = "default_min_score")]
    #[serde(alias = "min_score", rename = "minScore")]
    pub min_score: f64,
}

fn default_min_score() -> f64 {
    70.0
}

impl EnhancedMatchesRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            category: None,
            level: None,
            min_score: default_min_score(),
        }
    }

    /// Translate the request's filters into scoring preferences
    pub fn preferences(&self) -> MatchPreferences {
        MatchPreferences {
            preferred_categories: self.category.clone().into_iter().collect(),
            preferred_levels: self.level.clone().into_iter().collect(),
            ..MatchPreferences::default()
        }
    }
}

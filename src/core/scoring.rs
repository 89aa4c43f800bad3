use chrono::{DateTime, Utc};

use crate::core::categories::are_related;
use crate::models::{MatchPreferences, ScoringWeights, Skill};

/// Ordinal scale used for level distance
pub const SKILL_LEVELS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Expert"];

/// Raw level sub-score above which a "compatible levels" reason is attached
const LEVEL_REASON_CUTOFF: f64 = 20.0;

/// Calculate a compatibility score (0-100) for a pair of skills
///
/// Scoring terms (additive, then capped at 100):
///   category     +40 same, +25 related
///   level        distance sub-score (30/25/15/5) scaled by 0.3
///   type         +20 when one offers and the other wants
///   recency      +10 when the candidate skill is under 7 days old
///   preferences  +15 preferred category, +10 preferred level
///
/// Total function: unrecognized levels fall to the lowest bucket, nothing
/// here can fail. Evaluates recency against the current wall clock; use
/// [`calculate_compatibility_at`] for a fixed evaluation time.
pub fn calculate_compatibility(
    subject: &Skill,
    candidate: &Skill,
    preferences: &MatchPreferences,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    calculate_compatibility_at(subject, candidate, preferences, weights, Utc::now())
}

/// Calculate a compatibility score with an explicit evaluation time
pub fn calculate_compatibility_at(
    subject: &Skill,
    candidate: &Skill,
    preferences: &MatchPreferences,
    weights: &ScoringWeights,
    now: DateTime<Utc>,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Category term
    if subject.category == candidate.category {
        score += weights.same_category;
        reasons.push("Same skill category".to_string());
    } else if are_related(&subject.category, &candidate.category) {
        score += weights.related_category;
        reasons.push("Related skill categories".to_string());
    }

    // Level term. The raw sub-score ranges 0-30 and is then scaled by 0.3,
    // so the real maximum contribution is 9. Intentionally kept: rescaling
    // would change which pairs clear the inclusion threshold.
    let level_score = level_compatibility(&subject.level, &candidate.level);
    score += level_score * weights.level_scale;
    if level_score > LEVEL_REASON_CUTOFF {
        reasons.push("Compatible skill levels".to_string());
    }

    // Type complementarity
    if subject.skill_type != candidate.skill_type {
        score += weights.complementary_type;
        reasons.push("Complementary skill types (offer and want)".to_string());
    }

    // Recency bonus
    let days_since_created = (now - candidate.created_at).num_days();
    if days_since_created < 7 {
        score += weights.recency;
        reasons.push("Recently posted".to_string());
    }

    // Preference bonuses
    if preferences
        .preferred_categories
        .iter()
        .any(|c| c == &candidate.category)
    {
        score += weights.preferred_category;
        reasons.push("Matches your preferred categories".to_string());
    }

    if preferences
        .preferred_levels
        .iter()
        .any(|l| l == &candidate.level)
    {
        score += weights.preferred_level;
        reasons.push("Matches your preferred skill levels".to_string());
    }

    (score.min(100.0), reasons)
}

/// Level distance sub-score (0-30)
///
/// Perfect match 30, one level apart 25 (ideal for learning), two apart 15,
/// further 5. An unrecognized level on either side yields 0, below even the
/// distance floor.
#[inline]
pub fn level_compatibility(level1: &str, level2: &str) -> f64 {
    let (Some(i1), Some(i2)) = (level_index(level1), level_index(level2)) else {
        return 0.0;
    };

    match i1.abs_diff(i2) {
        0 => 30.0,
        1 => 25.0,
        2 => 15.0,
        _ => 5.0,
    }
}

#[inline]
fn level_index(level: &str) -> Option<usize> {
    SKILL_LEVELS.iter().position(|l| *l == level)
}

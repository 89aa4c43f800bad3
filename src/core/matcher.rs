use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{
    analysis::analyze_match_patterns, filters::is_scorable_pair,
    notifications::generate_match_notifications, scoring::calculate_compatibility_at,
};
use crate::models::{
    EnhancedMatchesRequest, MatchCandidate, MatchPreferences, MatchReport, ScoringWeights, Skill,
    SkillMatch, UserStats,
};

/// Minimum compatibility score for a pair to count as a match
pub const DEFAULT_MATCH_THRESHOLD: f64 = 70.0;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<SkillMatch>,
    pub pairs_scored: usize,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Pair viability pre-filter (own skills, same-type pairs)
/// 2. Pairwise compatibility scoring
/// 3. Threshold cut and ranking
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    match_threshold: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, match_threshold: f64) -> Self {
        Self {
            weights,
            match_threshold,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Build a matcher from loaded configuration
    pub fn from_settings(settings: &crate::config::Settings) -> Self {
        Self::new(
            settings.scoring.weights.clone().into(),
            settings.matching.match_threshold,
        )
    }

    /// Find matches between a user's skills and a candidate pool
    ///
    /// Scores every viable (subject skill, candidate) pair and keeps those at
    /// or above the match threshold. A candidate skill may appear once per
    /// qualifying subject skill; no deduplication is applied. Results are
    /// stable-sorted by score descending, so ties keep pair-generation order
    /// (subject-skill-major, candidate-minor).
    ///
    /// # Arguments
    /// * `user_id` - The requesting user's id
    /// * `user_skills` - That user's full skill list
    /// * `candidates` - Candidate pool (other users' skills joined with owner identity)
    /// * `preferences` - Optional category/level boosts
    pub fn find_matches(
        &self,
        user_id: &str,
        user_skills: &[Skill],
        candidates: &[MatchCandidate],
        preferences: &MatchPreferences,
    ) -> MatchResult {
        self.find_matches_at(user_id, user_skills, candidates, preferences, Utc::now())
    }

    /// Find matches with an explicit evaluation time for the recency term
    pub fn find_matches_at(
        &self,
        user_id: &str,
        user_skills: &[Skill],
        candidates: &[MatchCandidate],
        preferences: &MatchPreferences,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let mut matches: Vec<SkillMatch> = Vec::new();
        let mut pairs_scored = 0;

        for user_skill in user_skills {
            for candidate in candidates {
                if !is_scorable_pair(user_id, user_skill, candidate) {
                    continue;
                }

                let (score, _reasons) = calculate_compatibility_at(
                    user_skill,
                    &candidate.skill,
                    preferences,
                    &self.weights,
                    now,
                );
                pairs_scored += 1;

                if score >= self.match_threshold {
                    matches.push(SkillMatch {
                        user_id: candidate.skill.user_id.clone(),
                        user_name: candidate.user.name.clone(),
                        user_email: candidate.user.email.clone(),
                        skill_id: candidate.skill.id.clone(),
                        skill_title: candidate.skill.title.clone(),
                        skill_category: candidate.skill.category.clone(),
                        skill_level: candidate.skill.level.clone(),
                        compatibility_score: score,
                        // TODO: surface the per-pair reasons from the scorer here
                        match_reasons: Vec::new(),
                    });
                }
            }
        }

        // Stable sort keeps generation order for equal scores
        matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "scored {} pairs for user {}: {} at or above threshold {}",
            pairs_scored,
            user_id,
            matches.len(),
            self.match_threshold
        );

        MatchResult {
            matches,
            pairs_scored,
            total_candidates: candidates.len(),
        }
    }

    /// Build the full enhanced-matches payload for a request
    ///
    /// Runs the batch finder, applies the caller's `minScore` cut on top of
    /// the fixed threshold, then aggregates analysis, notifications, and user
    /// stats over the filtered batch.
    pub fn build_report(
        &self,
        request: &EnhancedMatchesRequest,
        user_skills: &[Skill],
        candidates: &[MatchCandidate],
    ) -> MatchReport {
        self.build_report_at(request, user_skills, candidates, Utc::now())
    }

    /// Build the enhanced-matches payload with an explicit evaluation time
    pub fn build_report_at(
        &self,
        request: &EnhancedMatchesRequest,
        user_skills: &[Skill],
        candidates: &[MatchCandidate],
        now: DateTime<Utc>,
    ) -> MatchReport {
        let preferences = request.preferences();
        let result =
            self.find_matches_at(&request.user_id, user_skills, candidates, &preferences, now);

        let matches: Vec<SkillMatch> = result
            .matches
            .into_iter()
            .filter(|m| m.compatibility_score >= request.min_score)
            .collect();

        let analysis = analyze_match_patterns(&matches);
        let notifications = generate_match_notifications(&matches);

        debug!(
            "report for user {}: {} matches after minScore {}, {} notifications",
            request.user_id,
            matches.len(),
            request.min_score,
            notifications.len()
        );

        MatchReport {
            user_stats: UserStats {
                total_skills: user_skills.len(),
                total_matches: matches.len(),
                average_compatibility: analysis.average_compatibility,
            },
            matches,
            analysis,
            notifications,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SkillOwner, SkillType};
    use chrono::Duration;

    fn make_skill(id: &str, user_id: &str, category: &str, level: &str, skill_type: SkillType) -> Skill {
        Skill {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: format!("{} sessions", category),
            category: category.to_string(),
            level: level.to_string(),
            skill_type,
            created_at: Utc::now(),
        }
    }

    fn make_candidate(
        id: &str,
        user_id: &str,
        category: &str,
        level: &str,
        skill_type: SkillType,
    ) -> MatchCandidate {
        MatchCandidate {
            skill: make_skill(id, user_id, category, level, skill_type),
            user: SkillOwner {
                id: user_id.to_string(),
                name: format!("User {}", user_id),
                email: format!("{}@example.com", user_id),
            },
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];

        let candidates = vec![
            // Same category, one level apart, fresh: 77.5, included
            make_candidate("c1", "u2", "Programming", "Advanced", SkillType::Offer),
            // Unrelated category: too low, excluded
            make_candidate("c2", "u3", "Cooking", "Advanced", SkillType::Offer),
            // Same type: never scored
            make_candidate("c3", "u4", "Programming", "Advanced", SkillType::Want),
        ];

        let result = matcher.find_matches(
            "u1",
            &user_skills,
            &candidates,
            &MatchPreferences::default(),
        );

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].skill_id, "c1");
        assert_eq!(result.matches[0].compatibility_score, 77.5);
        assert_eq!(result.pairs_scored, 2);
        assert_eq!(result.total_candidates, 3);
    }

    #[test]
    fn test_own_skills_never_matched() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];
        let candidates = vec![make_candidate(
            "c1",
            "u1",
            "Programming",
            "Advanced",
            SkillType::Offer,
        )];

        let result = matcher.find_matches(
            "u1",
            &user_skills,
            &candidates,
            &MatchPreferences::default(),
        );

        assert!(result.matches.is_empty());
        assert_eq!(result.pairs_scored, 0);
    }

    #[test]
    fn test_matches_sorted_by_score_descending() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];
        let now = Utc::now();

        let mut stale = make_candidate("c1", "u2", "Programming", "Advanced", SkillType::Offer);
        stale.skill.created_at = now - Duration::days(20); // 67.5, below threshold
        let exact = make_candidate("c2", "u3", "Programming", "Intermediate", SkillType::Offer); // 79
        let near = make_candidate("c3", "u4", "Programming", "Advanced", SkillType::Offer); // 77.5

        let result = matcher.find_matches_at(
            "u1",
            &user_skills,
            &[stale, near, exact],
            &MatchPreferences::default(),
            now,
        );

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].skill_id, "c2");
        assert_eq!(result.matches[1].skill_id, "c3");
        for pair in result.matches.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];

        // Identical scoring inputs under different ids
        let candidates = vec![
            make_candidate("c1", "u2", "Programming", "Advanced", SkillType::Offer),
            make_candidate("c2", "u3", "Programming", "Advanced", SkillType::Offer),
        ];

        let result = matcher.find_matches(
            "u1",
            &user_skills,
            &candidates,
            &MatchPreferences::default(),
        );

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].skill_id, "c1");
        assert_eq!(result.matches[1].skill_id, "c2");
    }

    #[test]
    fn test_candidate_appears_once_per_subject_skill() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![
            make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want),
            make_skill("s2", "u1", "Programming", "Advanced", SkillType::Want),
        ];
        let candidates = vec![make_candidate(
            "c1",
            "u2",
            "Programming",
            "Advanced",
            SkillType::Offer,
        )];

        let result = matcher.find_matches(
            "u1",
            &user_skills,
            &candidates,
            &MatchPreferences::default(),
        );

        // No dedup: the one candidate qualifies against both subject skills
        assert_eq!(result.matches.len(), 2);
        assert!(result.matches.iter().all(|m| m.skill_id == "c1"));
    }

    #[test]
    fn test_empty_candidate_pool() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];

        let result =
            matcher.find_matches("u1", &user_skills, &[], &MatchPreferences::default());

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_batch_results_carry_empty_reasons() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];
        let candidates = vec![make_candidate(
            "c1",
            "u2",
            "Programming",
            "Advanced",
            SkillType::Offer,
        )];

        let result = matcher.find_matches(
            "u1",
            &user_skills,
            &candidates,
            &MatchPreferences::default(),
        );

        assert!(result.matches[0].match_reasons.is_empty());
    }

    #[test]
    fn test_build_report_applies_min_score() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Programming", "Intermediate", SkillType::Want)];

        let candidates = vec![
            // 79 with fresh createdAt
            make_candidate("c1", "u2", "Programming", "Intermediate", SkillType::Offer),
            // 77.5
            make_candidate("c2", "u3", "Programming", "Advanced", SkillType::Offer),
        ];

        let mut request = EnhancedMatchesRequest::new("u1");
        request.min_score = 78.0;

        let report = matcher.build_report(&request, &user_skills, &candidates);

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].skill_id, "c1");
        assert_eq!(report.user_stats.total_skills, 1);
        assert_eq!(report.user_stats.total_matches, 1);
        assert_eq!(report.user_stats.average_compatibility, 79.0);
    }

    #[test]
    fn test_build_report_category_filter_boosts() {
        let matcher = Matcher::with_default_weights();
        let user_skills = vec![make_skill("s1", "u1", "Music", "Beginner", SkillType::Want)];

        // Related category (Music ~ Composition), one level apart, fresh:
        // 25 + 7.5 + 20 + 10 = 62.5, below threshold without a boost
        let candidates = vec![make_candidate(
            "c1",
            "u2",
            "Composition",
            "Intermediate",
            SkillType::Offer,
        )];

        let plain = matcher.build_report(
            &EnhancedMatchesRequest::new("u1"),
            &user_skills,
            &candidates,
        );
        assert!(plain.matches.is_empty());

        // +15 preferred-category bonus lifts it to 77.5
        let mut request = EnhancedMatchesRequest::new("u1");
        request.category = Some("Composition".to_string());
        let boosted = matcher.build_report(&request, &user_skills, &candidates);

        assert_eq!(boosted.matches.len(), 1);
        assert_eq!(boosted.matches[0].compatibility_score, 77.5);
    }
}

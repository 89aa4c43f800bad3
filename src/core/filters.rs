use crate::models::{MatchCandidate, Skill};

/// Check whether a candidate skill belongs to the requesting user
#[inline]
pub fn is_own_skill(subject_user_id: &str, candidate: &MatchCandidate) -> bool {
    candidate.skill.user_id == subject_user_id
}

/// Check whether two skills have complementary types (one offer, one want)
#[inline]
pub fn is_complementary(subject: &Skill, candidate: &Skill) -> bool {
    subject.skill_type != candidate.skill_type
}

/// Check whether a (subject skill, candidate) pair is eligible for scoring
///
/// Hard pre-filter applied before any scoring: a user's own skills are never
/// matched, and same-type pairs (offer/offer or want/want) are never scored.
#[inline]
pub fn is_scorable_pair(subject_user_id: &str, subject: &Skill, candidate: &MatchCandidate) -> bool {
    !is_own_skill(subject_user_id, candidate) && is_complementary(subject, &candidate.skill)
}

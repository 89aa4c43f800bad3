//! SkillSwap Algo - Skill compatibility matching engine for SkillSwap
//!
//! This library computes compatibility scores between offered and wanted
//! skills, finds batch matches above a fixed threshold, aggregates match
//! batches into summary insights, and turns high-value results into
//! notification payloads. All operations are synchronous and pure; data
//! access and HTTP serving are the embedding service's concern.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    analyze_match_patterns, calculate_compatibility, generate_match_notifications, MatchResult,
    Matcher, DEFAULT_MATCH_THRESHOLD,
};
pub use crate::models::{
    EnhancedMatchesRequest, MatchAnalysis, MatchCandidate, MatchNotification, MatchPreferences,
    MatchReport, ScoringWeights, Skill, SkillMatch, SkillOwner, SkillType,
};

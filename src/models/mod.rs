// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CategoryCount, MatchAnalysis, MatchCandidate, MatchNotification, MatchPreferences,
    NotificationKind, NotificationPriority, ParseSkillTypeError, ScoringWeights, Skill,
    SkillMatch, SkillOwner, SkillType,
};
pub use requests::EnhancedMatchesRequest;
pub use responses::{MatchReport, UserStats};

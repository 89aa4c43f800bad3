// Core algorithm exports
pub mod analysis;
pub mod categories;
pub mod filters;
pub mod matcher;
pub mod notifications;
pub mod scoring;

pub use analysis::analyze_match_patterns;
pub use categories::{are_related, related_categories};
pub use filters::{is_complementary, is_own_skill, is_scorable_pair};
pub use matcher::{Matcher, MatchResult, DEFAULT_MATCH_THRESHOLD};
pub use notifications::generate_match_notifications;
pub use scoring::{calculate_compatibility, calculate_compatibility_at, level_compatibility};

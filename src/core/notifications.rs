use crate::core::analysis::distinct_categories;
use crate::models::{MatchNotification, NotificationKind, NotificationPriority, SkillMatch};

/// Score above which a match triggers a high-priority notification
pub const HIGH_MATCH_CUTOFF: f64 = 90.0;

/// Build notification payloads for a match batch
///
/// Emits at most one `high_match` (first match above the cutoff — the top one
/// when the batch arrives sorted) and at most one `trending_skill` naming up
/// to three distinct categories. The `skill_gap` kind is declared in the
/// contract but has no emitter here.
pub fn generate_match_notifications(matches: &[SkillMatch]) -> Vec<MatchNotification> {
    let mut notifications = Vec::new();

    if let Some(top) = matches
        .iter()
        .find(|m| m.compatibility_score > HIGH_MATCH_CUTOFF)
    {
        notifications.push(MatchNotification {
            kind: NotificationKind::HighMatch,
            title: "Perfect Match Found!".to_string(),
            message: format!(
                "{} has a {} skill with {}% compatibility",
                top.user_name, top.skill_title, top.compatibility_score
            ),
            priority: NotificationPriority::High,
        });
    }

    let trending: Vec<&str> = distinct_categories(matches).into_iter().take(3).collect();
    if !trending.is_empty() {
        notifications.push(MatchNotification {
            kind: NotificationKind::TrendingSkill,
            title: "Trending Skills".to_string(),
            message: format!("Skills in {} are in high demand", trending.join(", ")),
            priority: NotificationPriority::Medium,
        });
    }

    notifications
}

use crate::models::{CategoryCount, MatchAnalysis, SkillMatch};

/// Score below which a match counts as a weak result for gap analysis
const WEAK_MATCH_CUTOFF: f64 = 80.0;

/// Minimum distinct categories before diversity stops being flagged
const CATEGORY_DIVERSITY_FLOOR: usize = 3;

/// Aggregate a match batch into summary insights
///
/// Top categories are counted in first-seen order and stable-sorted by count,
/// so ties keep their first appearance order. An empty batch yields a zero
/// average and empty top categories.
pub fn analyze_match_patterns(matches: &[SkillMatch]) -> MatchAnalysis {
    let mut category_counts: Vec<CategoryCount> = Vec::new();
    let mut total_compatibility = 0.0;

    for m in matches {
        match category_counts
            .iter_mut()
            .find(|c| c.category == m.skill_category)
        {
            Some(entry) => entry.count += 1,
            None => category_counts.push(CategoryCount {
                category: m.skill_category.clone(),
                count: 1,
            }),
        }
        total_compatibility += m.compatibility_score;
    }

    category_counts.sort_by(|a, b| b.count.cmp(&a.count));
    category_counts.truncate(5);

    let average_compatibility = if matches.is_empty() {
        0.0
    } else {
        total_compatibility / matches.len() as f64
    };

    MatchAnalysis {
        top_categories: category_counts,
        average_compatibility,
        skill_gaps: analyze_skill_gaps(matches),
        recommendations: generate_recommendations(matches, average_compatibility),
    }
}

/// Qualitative gap observations over a match batch
fn analyze_skill_gaps(matches: &[SkillMatch]) -> Vec<String> {
    let mut gaps = Vec::new();

    if matches
        .iter()
        .any(|m| m.compatibility_score < WEAK_MATCH_CUTOFF)
    {
        gaps.push("Consider developing complementary skills".to_string());
    }

    if distinct_categories(matches).len() < CATEGORY_DIVERSITY_FLOOR {
        gaps.push("Explore skills in different categories for better matching".to_string());
    }

    gaps
}

/// Template recommendations picked by threshold buckets
fn generate_recommendations(matches: &[SkillMatch], average_compatibility: f64) -> Vec<String> {
    let mut recommendations = Vec::new();

    if average_compatibility > 85.0 {
        recommendations
            .push("Excellent match quality! Consider expanding your skill portfolio".to_string());
    } else if average_compatibility > 70.0 {
        recommendations
            .push("Good matches available. Try refining your skill descriptions".to_string());
    } else {
        recommendations
            .push("Consider adding more diverse skills to improve matching".to_string());
    }

    if matches.len() > 10 {
        recommendations
            .push("Many potential matches found! Use filters to narrow down results".to_string());
    } else if matches.len() < 3 {
        recommendations
            .push("Few matches available. Consider broadening your skill categories".to_string());
    }

    recommendations
}

/// Distinct categories in batch order
pub(crate) fn distinct_categories(matches: &[SkillMatch]) -> Vec<&str> {
    let mut categories: Vec<&str> = Vec::new();
    for m in matches {
        if !categories.contains(&m.skill_category.as_str()) {
            categories.push(&m.skill_category);
        }
    }
    categories
}

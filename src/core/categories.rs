/// Hand-curated adjacency table between skill categories
///
/// Returns the categories listed as related to `category`, or an empty slice
/// for categories with no entry. The table is directional as written;
/// [`are_related`] applies it symmetrically.
pub fn related_categories(category: &str) -> &'static [&'static str] {
    match category {
        "Programming" => &["Web Development", "Mobile Development", "Data Science", "DevOps"],
        "Web Development" => &["Programming", "Design", "DevOps"],
        "Mobile Development" => &["Programming", "Design", "UI/UX"],
        "Design" => &["UI/UX", "Web Development", "Mobile Development", "Marketing"],
        "UI/UX" => &["Design", "Web Development", "Mobile Development"],
        "Data Science" => &["Programming", "Analytics", "Machine Learning"],
        "Marketing" => &["Design", "Content Creation", "Social Media"],
        "Content Creation" => &["Marketing", "Writing", "Video Production"],
        "Writing" => &["Content Creation", "Marketing", "Translation"],
        "Music" => &["Audio Production", "Performance", "Composition"],
        "Photography" => &["Video Production", "Design", "Marketing"],
        "Video Production" => &["Photography", "Content Creation", "Marketing"],
        _ => &[],
    }
}

/// Check whether two categories are related in either direction
#[inline]
pub fn are_related(cat1: &str, cat2: &str) -> bool {
    related_categories(cat1).contains(&cat2) || related_categories(cat2).contains(&cat1)
}

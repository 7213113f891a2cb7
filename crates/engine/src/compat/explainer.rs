//! Human-readable rationale for compatibility results.

use super::{MatchType, RecommendationLevel, SkillMatch};

/// Build the ordered rationale lines for a scored team.
///
/// Always opens with the percentage line; adds a "Strong in" line when
/// any requirement matched exactly and a "Missing" line for every
/// requirement still counted as a gap (category matches included).
pub fn build_reasoning(
    score: f64,
    level: RecommendationLevel,
    matches: &[SkillMatch],
) -> Vec<String> {
    let mut lines = vec![format!(
        "{} skill compatibility ({:.0}%)",
        level.title(),
        score * 100.0
    )];

    let strong: Vec<&str> = matches
        .iter()
        .filter(|m| m.match_type == MatchType::Exact)
        .map(|m| m.skill_name.as_str())
        .collect();
    if !strong.is_empty() {
        lines.push(format!("Strong in: {}", strong.join(", ")));
    }

    let missing: Vec<&str> = matches
        .iter()
        .filter(|m| m.match_type != MatchType::Exact)
        .map(|m| m.skill_name.as_str())
        .collect();
    if !missing.is_empty() {
        lines.push(format!("Missing: {}", missing.join(", ")));
    }

    lines
}

/// Recommendation wording for ranked lists.
pub fn ranking_phrase(level: RecommendationLevel) -> &'static str {
    match level {
        RecommendationLevel::Excellent => "Excellent match: ready to staff immediately",
        RecommendationLevel::Good => "Good match: minor skill gaps",
        RecommendationLevel::Fair => "Fair match: training recommended",
        RecommendationLevel::Poor => "Poor match: consider an alternative team or new hire",
    }
}

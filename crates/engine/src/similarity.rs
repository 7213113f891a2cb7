//! Levenshtein-based text similarity for fuzzy skill reconciliation.
//!
//! One shared utility with a single confidence contract, used by the
//! entity-reconciliation collaborators (OCR text extraction, legacy
//! skills migration) to map free-text skill labels onto catalog ids.

use crewmatch_model::SkillCatalog;
use serde::{Deserialize, Serialize};

/// Default confidence floor for fuzzy catalog matching.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// A free-text label resolved to a catalog skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillNameMatch {
    pub skill_id: String,
    pub skill_name: String,
    /// Confidence in `[0, 1]`; 1.0 for exact id or name hits.
    pub confidence: f64,
}

/// Normalized Levenshtein similarity between two strings.
///
/// Case-insensitive; returns 0.0 when either side is empty and 1.0 for
/// identical inputs.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Best similarity between the needle and any word of the haystack.
///
/// Words shorter than three characters are skipped; they match almost
/// anything and carry no signal.
pub fn best_word_match(needle: &str, haystack: &str) -> f64 {
    if needle.is_empty() || haystack.is_empty() {
        return 0.0;
    }

    haystack
        .split(|c: char| !c.is_alphanumeric() && c != '-' && c != '_' && c != '.')
        .filter(|word| word.len() >= 3)
        .map(|word| similarity(needle, word))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0)
}

/// Resolve one free-text label to the best-matching catalog skill.
///
/// An exact id hit or case-insensitive name hit short-circuits at full
/// confidence; otherwise the best of name/id similarity decides, and
/// anything below `threshold` is `None`.
pub fn match_skill_name(
    label: &str,
    catalog: &SkillCatalog,
    threshold: f64,
) -> Option<SkillNameMatch> {
    if label.is_empty() {
        return None;
    }

    if let Some(skill) = catalog.get(label) {
        return Some(SkillNameMatch {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            confidence: 1.0,
        });
    }

    let label_lower = label.to_lowercase();
    let mut best: Option<SkillNameMatch> = None;

    for skill in catalog.iter() {
        let confidence = if skill.name.to_lowercase() == label_lower {
            1.0
        } else {
            similarity(label, &skill.name).max(similarity(label, &skill.id))
        };

        if confidence >= threshold
            && best.as_ref().map_or(true, |b| confidence > b.confidence)
        {
            best = Some(SkillNameMatch {
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                confidence,
            });
        }
    }

    best
}

/// Batch entry point for the migration collaborator: resolve each label,
/// keeping unresolved ones so the caller can surface them for review.
pub fn reconcile_skill_names<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    catalog: &SkillCatalog,
    threshold: f64,
) -> Vec<(String, Option<SkillNameMatch>)> {
    labels
        .into_iter()
        .map(|label| (label.to_string(), match_skill_name(label, catalog, threshold)))
        .collect()
}

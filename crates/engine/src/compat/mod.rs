//! Team/project compatibility scoring with per-skill match detail.

mod explainer;
mod scorer;

pub use explainer::{build_reasoning, ranking_phrase};
pub use scorer::CompatibilityScorer;

use serde::{Deserialize, Serialize};

/// How a single required skill was matched against a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The required skill id is present in the team's effective set.
    Exact,
    /// No exact match, but the team holds another skill in the same
    /// category. Adjacent-but-incomplete capability: partial credit,
    /// still counted as a gap.
    Category,
    /// Neither.
    None,
}

impl MatchType {
    /// Short label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Category => "category",
            Self::None => "none",
        }
    }
}

/// Per-skill match detail inside a [`CompatibilityResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill_id: String,
    pub skill_name: String,
    pub match_type: MatchType,
}

/// Qualitative bucket for a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl RecommendationLevel {
    /// Bucket a score with fixed, inclusive lower bounds.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.3 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase label ("poor" .. "excellent").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Capitalized label for sentence openers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// One team's compatibility against a resolved requirement set.
///
/// Invariant: `skills_required == skills_matched + skills_gap`. Category
/// matches earn partial score credit but still count toward the gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub team_id: String,
    /// Present when the requirements were resolved for a project; absent
    /// for ad-hoc queries.
    pub project_id: Option<String>,
    pub skills_required: usize,
    /// Exact matches only.
    pub skills_matched: usize,
    pub skills_gap: usize,
    /// In `[0, 1]`. Zero when nothing is required: no information is not
    /// a perfect match.
    pub compatibility_score: f64,
    pub skill_matches: Vec<SkillMatch>,
    pub recommendation: RecommendationLevel,
    /// Ordered human-readable rationale lines.
    pub reasoning: Vec<String>,
}

//! Engine calibration constants and configuration.

use crate::error::EngineError;
use crate::similarity::DEFAULT_SIMILARITY_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Partial credit awarded when a team holds no exact match for a required
/// skill but does hold another skill in the same category.
///
/// Must stay below 0.4: a team with two exact matches and one category
/// match over three requirements is a "good" fit, not an "excellent" one,
/// and `(2 + credit) / 3 < 0.8` only holds for credit < 0.4.
pub const DEFAULT_CATEGORY_MATCH_CREDIT: f64 = 0.3;

/// Teams that must hold a skill before it counts as well covered.
pub const DEFAULT_WELL_COVERED_TEAMS: usize = 3;

/// Categories whose coverage percentage falls below this need attention.
pub const DEFAULT_CATEGORY_ATTENTION_PCT: f64 = 60.0;

/// Calibration knobs for scoring and coverage analysis.
///
/// Defaults are pinned by the test suite; callers that override them
/// should run the result through [`EngineConfig::validated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Credit in `(0, 1)` for a category-level match.
    pub category_match_credit: f64,
    /// Minimum covering teams for "well covered" status.
    pub well_covered_teams: usize,
    /// Coverage percentage below which a category needs attention.
    pub category_attention_pct: f64,
    /// Confidence floor for fuzzy catalog reconciliation.
    pub similarity_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            category_match_credit: DEFAULT_CATEGORY_MATCH_CREDIT,
            well_covered_teams: DEFAULT_WELL_COVERED_TEAMS,
            category_attention_pct: DEFAULT_CATEGORY_ATTENTION_PCT,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration, returning it unchanged when every
    /// field is in range.
    pub fn validated(self) -> Result<Self, EngineError> {
        if !(self.category_match_credit > 0.0 && self.category_match_credit < 1.0) {
            return Err(EngineError::InvalidCategoryCredit(
                self.category_match_credit,
            ));
        }
        if !(0.0..=100.0).contains(&self.category_attention_pct) {
            return Err(EngineError::InvalidAttentionPercentage(
                self.category_attention_pct,
            ));
        }
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(EngineError::InvalidSimilarityThreshold(
                self.similarity_threshold,
            ));
        }
        Ok(self)
    }
}

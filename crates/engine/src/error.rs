//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// The analysis functions themselves are total over well-typed inputs
/// (missing references are dropped, empty inputs yield documented
/// degenerate values), so the only fallible surface is configuration
/// validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Category match credit must lie strictly between 0 and 1.
    #[error("category match credit must be in (0, 1), got {0}")]
    InvalidCategoryCredit(f64),

    /// Category attention threshold is a percentage.
    #[error("category attention threshold must be in [0, 100], got {0}")]
    InvalidAttentionPercentage(f64),

    /// Similarity threshold must be a usable confidence floor.
    #[error("similarity threshold must be in (0, 1], got {0}")]
    InvalidSimilarityThreshold(f64),
}

//! Skill-based team/project compatibility and recommendation engine.
//!
//! This crate provides:
//! - Requirement resolution: the de-duplicated skill set a project needs,
//!   aggregated from linked solutions and project-specific entries
//! - Compatibility scoring between a team and a requirement set, with
//!   tiered exact/category matching and human-readable rationale
//! - Cross-team gap analysis and organization-wide skill coverage reports
//! - Ad-hoc team filtering and ranked team recommendations for a project
//!
//! Every operation is a pure, synchronous computation over immutable
//! snapshots supplied by the caller; nothing here performs I/O, blocks,
//! or holds shared state, so all public functions are safe to call
//! concurrently.

pub mod compat;
pub mod config;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod gaps;
pub mod recommend;
pub mod requirements;
pub mod similarity;

pub use compat::{
    ranking_phrase, CompatibilityResult, CompatibilityScorer, MatchType, RecommendationLevel,
    SkillMatch,
};
pub use config::EngineConfig;
pub use coverage::{
    analyze_skill_coverage, CategoryCoverage, CoverageRecommendations, SkillCoverage,
    SkillCoverageReport,
};
pub use error::EngineError;
pub use filter::{filter_teams_by_skills, RankedTeamMatch};
pub use gaps::{analyze_project_skill_gaps, GapPriority, ProjectSkillGapAnalysis, SkillGap};
pub use recommend::{recommend_teams_for_project, RankedRecommendation, DEFAULT_MAX_RESULTS};
pub use requirements::{resolve_required_skills, RequiredSkill, SkillSource};
pub use similarity::{
    best_word_match, match_skill_name, reconcile_skill_names, similarity, SkillNameMatch,
    DEFAULT_SIMILARITY_THRESHOLD,
};

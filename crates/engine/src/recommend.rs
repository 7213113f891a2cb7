//! Ranked team recommendations for a project.

use crate::compat::{ranking_phrase, CompatibilityResult, CompatibilityScorer};
use crate::config::EngineConfig;
use crate::requirements::resolve_required_skills;
use crewmatch_model::{Person, PersonSkill, ProjectSkill, ProjectSolution, SkillCatalog, Solution, Team};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of recommendations to return.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// One entry in a ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    /// 1-based rank.
    pub rank: usize,
    pub team_id: String,
    pub team_name: String,
    pub result: CompatibilityResult,
    /// Narrative phrased for ranking context.
    pub recommendation: String,
}

/// Resolve a project's requirements once, score all candidate teams, and
/// return the top `max_results` ranked 1..N.
///
/// Ordering is score descending, then gap ascending, then team id, so
/// repeated calls over identical snapshots return identical rankings.
#[allow(clippy::too_many_arguments)]
pub fn recommend_teams_for_project(
    project_id: &str,
    teams: &[Team],
    project_skills: &[ProjectSkill],
    solutions: &[Solution],
    catalog: &SkillCatalog,
    project_solutions: &[ProjectSolution],
    people: &[Person],
    person_skills: &[PersonSkill],
    max_results: usize,
    config: &EngineConfig,
) -> Vec<RankedRecommendation> {
    let required =
        resolve_required_skills(project_id, project_skills, solutions, catalog, project_solutions);
    let scorer =
        CompatibilityScorer::new(catalog, config.clone()).with_people(people, person_skills);

    let mut scored: Vec<(&Team, CompatibilityResult)> = teams
        .iter()
        .map(|team| (team, scorer.score(team, &required, Some(project_id))))
        .collect();

    scored.sort_by(|(_, a), (_, b)| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.skills_gap.cmp(&b.skills_gap))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    let recommendations: Vec<RankedRecommendation> = scored
        .into_iter()
        .take(max_results)
        .enumerate()
        .map(|(i, (team, result))| RankedRecommendation {
            rank: i + 1,
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            recommendation: ranking_phrase(result.recommendation).to_string(),
            result,
        })
        .collect();

    debug!(
        project_id,
        candidates = teams.len(),
        returned = recommendations.len(),
        "recommended teams for project"
    );

    recommendations
}

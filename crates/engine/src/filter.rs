//! Filter and rank teams against an ad-hoc required-skill list.

use crate::compat::{
    CompatibilityResult, CompatibilityScorer, RecommendationLevel,
};
use crate::config::EngineConfig;
use crate::requirements::{RequiredSkill, SkillSource};
use crewmatch_model::{Importance, Person, PersonSkill, SkillCatalog, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A team that passed the compatibility threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeamMatch {
    pub team_id: String,
    pub team_name: String,
    pub result: CompatibilityResult,
}

/// Score every team against an arbitrary skill-id list and keep those at
/// or above `min_compatibility`, sorted by score descending with a
/// stable tie-break on team name.
///
/// The ad-hoc requirements are tagged high importance; unknown skill ids
/// are dropped like any stale reference. An empty `required_skill_ids`
/// list is a zero-constraint query: every team passes with a vacuous
/// score of exactly 1.0, regardless of the threshold.
pub fn filter_teams_by_skills(
    teams: &[Team],
    required_skill_ids: &[String],
    catalog: &SkillCatalog,
    people: &[Person],
    person_skills: &[PersonSkill],
    min_compatibility: f64,
    config: &EngineConfig,
) -> Vec<RankedTeamMatch> {
    if required_skill_ids.is_empty() {
        return teams
            .iter()
            .map(|team| RankedTeamMatch {
                team_id: team.id.clone(),
                team_name: team.name.clone(),
                result: vacuous_result(team),
            })
            .collect();
    }

    let required = adhoc_requirements(required_skill_ids, catalog);
    let scorer =
        CompatibilityScorer::new(catalog, config.clone()).with_people(people, person_skills);

    let mut matches: Vec<RankedTeamMatch> = teams
        .iter()
        .filter_map(|team| {
            let result = scorer.score(team, &required, None);
            if result.compatibility_score >= min_compatibility {
                Some(RankedTeamMatch {
                    team_id: team.id.clone(),
                    team_name: team.name.clone(),
                    result,
                })
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        b.result
            .compatibility_score
            .partial_cmp(&a.result.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });

    debug!(
        requested = required_skill_ids.len(),
        resolved = required.len(),
        passed = matches.len(),
        min_compatibility,
        "filtered teams by ad-hoc skills"
    );

    matches
}

fn adhoc_requirements(skill_ids: &[String], catalog: &SkillCatalog) -> Vec<RequiredSkill> {
    let mut seen = HashSet::new();
    skill_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| catalog.get(id))
        .map(|skill| RequiredSkill {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            category: skill.category.clone(),
            source: SkillSource::AdHoc,
            importance: Importance::High,
        })
        .collect()
}

/// A zero-constraint query is trivially satisfied.
fn vacuous_result(team: &Team) -> CompatibilityResult {
    CompatibilityResult {
        team_id: team.id.clone(),
        project_id: None,
        skills_required: 0,
        skills_matched: 0,
        skills_gap: 0,
        compatibility_score: 1.0,
        skill_matches: Vec::new(),
        recommendation: RecommendationLevel::Excellent,
        reasoning: vec!["No skill constraints supplied; any team qualifies".to_string()],
    }
}

//! Organization-wide skill coverage analysis.

use crate::compat::CompatibilityScorer;
use crate::config::EngineConfig;
use crewmatch_model::{Person, PersonSkill, SkillCatalog, Team};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Coverage of one catalog skill across all teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCoverage {
    pub skill_id: String,
    pub skill_name: String,
    pub category: String,
    /// Distinct teams whose effective skill set contains this skill.
    pub coverage_count: usize,
    /// Ids of those teams, sorted.
    pub covering_teams: Vec<String>,
    /// No team covers this skill.
    pub at_risk: bool,
}

/// Coverage rollup for one skill category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub total_skills: usize,
    pub covered_skills: usize,
    pub coverage_percentage: f64,
}

/// Suggested follow-ups derived from the coverage numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRecommendations {
    /// Names of skills held by no team.
    pub skills_at_risk: Vec<String>,
    /// Names of skills held by at least `well_covered_teams` teams.
    pub skills_well_covered: Vec<String>,
    /// Categories below the attention threshold.
    pub categories_needing_attention: Vec<String>,
}

/// Organization-wide coverage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCoverageReport {
    pub total_skills: usize,
    /// Skills with at least one covering team.
    pub covered_skills: usize,
    /// `covered / total * 100`; zero (not NaN) on an empty catalog.
    pub coverage_percentage: f64,
    /// Per-skill detail in catalog order.
    pub skills: Vec<SkillCoverage>,
    pub category_analysis: BTreeMap<String, CategoryCoverage>,
    pub recommendations: CoverageRecommendations,
}

fn percentage(covered: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        covered as f64 / total as f64 * 100.0
    }
}

/// Report how well each catalog skill and category is staffed across all
/// teams. Teams with no declared or inferred skills simply contribute no
/// coverage; an empty catalog yields an all-zero report.
pub fn analyze_skill_coverage(
    teams: &[Team],
    catalog: &SkillCatalog,
    people: &[Person],
    person_skills: &[PersonSkill],
    config: &EngineConfig,
) -> SkillCoverageReport {
    let scorer =
        CompatibilityScorer::new(catalog, config.clone()).with_people(people, person_skills);
    let effective_sets: Vec<(&str, std::collections::BTreeSet<String>)> = teams
        .iter()
        .map(|team| (team.id.as_str(), scorer.effective_skills(team)))
        .collect();

    let mut skills = Vec::with_capacity(catalog.len());
    let mut per_category: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let mut recommendations = CoverageRecommendations::default();

    for skill in catalog.iter() {
        let covering_teams: Vec<String> = effective_sets
            .iter()
            .filter(|(_, set)| set.contains(&skill.id))
            .map(|(id, _)| (*id).to_string())
            .collect();
        let coverage_count = covering_teams.len();
        let at_risk = coverage_count == 0;

        let entry = per_category.entry(skill.category.clone()).or_insert((0, 0));
        entry.0 += 1;
        if !at_risk {
            entry.1 += 1;
        }

        if at_risk {
            recommendations.skills_at_risk.push(skill.name.clone());
        } else if coverage_count >= config.well_covered_teams {
            recommendations.skills_well_covered.push(skill.name.clone());
        }

        let mut covering_teams = covering_teams;
        covering_teams.sort();
        skills.push(SkillCoverage {
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            category: skill.category.clone(),
            coverage_count,
            covering_teams,
            at_risk,
        });
    }

    let category_analysis: BTreeMap<String, CategoryCoverage> = per_category
        .into_iter()
        .map(|(category, (total, covered))| {
            (
                category,
                CategoryCoverage {
                    total_skills: total,
                    covered_skills: covered,
                    coverage_percentage: percentage(covered, total),
                },
            )
        })
        .collect();

    recommendations.categories_needing_attention = category_analysis
        .iter()
        .filter(|(_, c)| c.coverage_percentage < config.category_attention_pct)
        .map(|(name, _)| name.clone())
        .collect();

    let total_skills = catalog.len();
    let covered_skills = skills.iter().filter(|s| !s.at_risk).count();

    debug!(
        total_skills,
        covered_skills,
        at_risk = recommendations.skills_at_risk.len(),
        "analyzed organization skill coverage"
    );

    SkillCoverageReport {
        total_skills,
        covered_skills,
        coverage_percentage: percentage(covered_skills, total_skills),
        skills,
        category_analysis,
        recommendations,
    }
}

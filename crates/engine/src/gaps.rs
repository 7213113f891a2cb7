//! Cross-team skill-gap analysis for one project.

use crate::compat::{CompatibilityResult, CompatibilityScorer, MatchType};
use crate::config::EngineConfig;
use crate::requirements::{resolve_required_skills, RequiredSkill};
use crewmatch_model::{Person, PersonSkill, ProjectSkill, ProjectSolution, SkillCatalog, Solution, Team};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How urgently a skill gap needs closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapPriority {
    /// No team has even a category-adjacent skill.
    Critical,
    /// More than half the candidate teams lack an exact match.
    Important,
    /// A minority of teams lack it.
    NiceToHave,
}

/// One required skill some candidate team lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill_id: String,
    pub skill_name: String,
    /// Teams without an exact match, sorted by team id.
    pub teams_needing: Vec<String>,
    pub priority: GapPriority,
}

/// Result of running the scorer across every candidate team for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSkillGapAnalysis {
    pub project_id: String,
    pub required_skills: Vec<RequiredSkill>,
    /// Per-team compatibility, in input team order.
    pub team_results: Vec<CompatibilityResult>,
    /// Best-fit team id: highest score, ties broken by lowest gap then
    /// team id. `None` when no team carries any information.
    pub best_team: Option<String>,
    pub skill_gaps: Vec<SkillGap>,
    /// Org-wide gaps where some team holds a category-adjacent skill, so
    /// upskilling is plausible.
    pub training_needs: Vec<String>,
    /// Org-wide gaps with no internal adjacency to build from.
    pub hiring_needs: Vec<String>,
}

/// Resolve a project's requirements once and analyze every team's fit
/// and the cross-team gaps.
///
/// Pass empty `people`/`person_skills` slices when no staffing data is
/// available; declared team skills are used alone.
#[allow(clippy::too_many_arguments)]
pub fn analyze_project_skill_gaps(
    project_id: &str,
    teams: &[Team],
    project_skills: &[ProjectSkill],
    solutions: &[Solution],
    catalog: &SkillCatalog,
    project_solutions: &[ProjectSolution],
    people: &[Person],
    person_skills: &[PersonSkill],
    config: &EngineConfig,
) -> ProjectSkillGapAnalysis {
    let required =
        resolve_required_skills(project_id, project_skills, solutions, catalog, project_solutions);

    let scorer =
        CompatibilityScorer::new(catalog, config.clone()).with_people(people, person_skills);
    let team_results: Vec<CompatibilityResult> = teams
        .iter()
        .map(|team| scorer.score(team, &required, Some(project_id)))
        .collect();

    let best_team = pick_best_team(teams, &team_results);
    let (skill_gaps, training_needs, hiring_needs) =
        collect_gaps(teams, &required, &team_results);

    debug!(
        project_id,
        teams = teams.len(),
        gaps = skill_gaps.len(),
        best_team = best_team.as_deref().unwrap_or("-"),
        "analyzed project skill gaps"
    );

    ProjectSkillGapAnalysis {
        project_id: project_id.to_string(),
        required_skills: required,
        team_results,
        best_team,
        skill_gaps,
        training_needs,
        hiring_needs,
    }
}

/// Highest score wins; ties break by lowest gap, then team id. A zero
/// maximum means every team scored zero, which only carries information
/// when there is exactly one candidate.
fn pick_best_team(teams: &[Team], results: &[CompatibilityResult]) -> Option<String> {
    let best = results.iter().min_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.skills_gap.cmp(&b.skills_gap))
            .then(a.team_id.cmp(&b.team_id))
    })?;

    if best.compatibility_score == 0.0 && teams.len() > 1 {
        return None;
    }
    Some(best.team_id.clone())
}

fn collect_gaps(
    teams: &[Team],
    required: &[RequiredSkill],
    results: &[CompatibilityResult],
) -> (Vec<SkillGap>, Vec<String>, Vec<String>) {
    let mut gaps = Vec::new();
    let mut training = Vec::new();
    let mut hiring = Vec::new();

    if teams.is_empty() {
        return (gaps, training, hiring);
    }

    for (i, req) in required.iter().enumerate() {
        let mut teams_needing = Vec::new();
        let mut exact = 0usize;
        let mut category = 0usize;

        for result in results {
            match result.skill_matches[i].match_type {
                MatchType::Exact => exact += 1,
                MatchType::Category => {
                    category += 1;
                    teams_needing.push(result.team_id.clone());
                }
                MatchType::None => teams_needing.push(result.team_id.clone()),
            }
        }

        if teams_needing.is_empty() {
            continue;
        }
        teams_needing.sort();

        let priority = if exact == 0 && category == 0 {
            GapPriority::Critical
        } else if teams_needing.len() * 2 > teams.len() {
            GapPriority::Important
        } else {
            GapPriority::NiceToHave
        };

        if exact == 0 {
            if category > 0 {
                training.push(req.skill_name.clone());
            } else {
                hiring.push(req.skill_name.clone());
            }
        }

        gaps.push(SkillGap {
            skill_id: req.skill_id.clone(),
            skill_name: req.skill_name.clone(),
            teams_needing,
            priority,
        });
    }

    (gaps, training, hiring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewmatch_model::Importance;
    use crewmatch_test_utils::{fixture_catalog, fixture_teams, project_skill, team};

    fn requirements(ids: &[&str]) -> Vec<ProjectSkill> {
        ids.iter()
            .map(|id| project_skill("p1", id, Importance::High))
            .collect()
    }

    fn analyze(teams: &[Team], req_ids: &[&str]) -> ProjectSkillGapAnalysis {
        let catalog = fixture_catalog();
        analyze_project_skill_gaps(
            "p1",
            teams,
            &requirements(req_ids),
            &[],
            &catalog,
            &[],
            &[],
            &[],
            &EngineConfig::default(),
        )
    }

    #[test]
    fn best_team_is_highest_score() {
        let teams = fixture_teams();
        let analysis = analyze(&teams, &["react", "typescript", "node"]);

        // Platform holds all three; Web holds two.
        assert_eq!(analysis.best_team.as_deref(), Some("platform"));
        assert_eq!(analysis.team_results.len(), 4);
    }

    #[test]
    fn no_teams_means_no_best_team() {
        let analysis = analyze(&[], &["react"]);
        assert!(analysis.best_team.is_none());
        assert!(analysis.team_results.is_empty());
        assert!(analysis.skill_gaps.is_empty());
    }

    #[test]
    fn all_zero_ties_carry_no_information() {
        let teams = vec![team("a", "A", &["react"]), team("b", "B", &["react"])];
        let analysis = analyze(&teams, &["docker"]);

        assert!(analysis.best_team.is_none());
    }

    #[test]
    fn lone_zero_scoring_team_is_still_best() {
        let teams = vec![team("a", "A", &["react"])];
        let analysis = analyze(&teams, &["docker"]);

        assert_eq!(analysis.best_team.as_deref(), Some("a"));
    }

    #[test]
    fn score_tie_breaks_by_gap_then_id() {
        // Identical skill sets force a pure score tie; the id tie-break
        // must pick deterministically.
        let teams = vec![
            team("zeta", "Zeta", &["react"]),
            team("alpha", "Alpha", &["react"]),
        ];
        let analysis = analyze(&teams, &["react"]);

        assert_eq!(analysis.best_team.as_deref(), Some("alpha"));
    }

    #[test]
    fn gap_priorities_span_the_ladder() {
        let teams = fixture_teams();
        // vue: no exact anywhere, but Frontend adjacency exists -> not
        // critical, all four teams need it -> important.
        // docker: only infra holds it, 3 of 4 need it -> important.
        // python: infra and data hold it, 2 of 4 need it -> nice-to-have.
        let analysis = analyze(&teams, &["vue", "docker", "python"]);

        let by_id = |id: &str| {
            analysis
                .skill_gaps
                .iter()
                .find(|g| g.skill_id == id)
                .unwrap()
        };

        assert_eq!(by_id("vue").priority, GapPriority::Important);
        assert_eq!(by_id("vue").teams_needing.len(), 4);
        assert_eq!(by_id("docker").priority, GapPriority::Important);
        assert_eq!(by_id("python").priority, GapPriority::NiceToHave);
        assert_eq!(by_id("python").teams_needing, vec!["platform", "web"]);
    }

    #[test]
    fn critical_when_no_adjacency_exists() {
        let teams = vec![team("a", "A", &["python"]), team("b", "B", &["python"])];
        let analysis = analyze(&teams, &["docker"]);

        assert_eq!(analysis.skill_gaps.len(), 1);
        assert_eq!(analysis.skill_gaps[0].priority, GapPriority::Critical);
        assert_eq!(analysis.hiring_needs, vec!["Docker"]);
        assert!(analysis.training_needs.is_empty());
    }

    #[test]
    fn training_needs_require_category_adjacency() {
        let teams = fixture_teams();
        let analysis = analyze(&teams, &["vue"]);

        // No team holds Vue.js, but frontend-adjacent teams exist.
        assert_eq!(analysis.training_needs, vec!["Vue.js"]);
        assert!(analysis.hiring_needs.is_empty());
    }

    #[test]
    fn fully_covered_skills_produce_no_gap_entry() {
        let teams = vec![team("a", "A", &["react"]), team("b", "B", &["react"])];
        let analysis = analyze(&teams, &["react"]);

        assert!(analysis.skill_gaps.is_empty());
        assert!(analysis.training_needs.is_empty());
        assert!(analysis.hiring_needs.is_empty());
    }
}

//! Resolve the effective required-skill set of a project.
//!
//! A project's requirements come from two places: the skill sets of the
//! solutions it is linked to, and project-specific skill entries. The
//! resolver unions both by skill id, treating project-specific entries as
//! intentional overrides of whatever a solution implies.

use crewmatch_model::{Importance, ProjectSkill, ProjectSolution, SkillCatalog, Solution};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Where a required skill came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    /// Implied by a solution linked to the project.
    Solution,
    /// A project-specific skill entry.
    Project,
    /// Supplied directly by an ad-hoc query, not tied to a project.
    AdHoc,
}

/// A resolved requirement: one catalog skill a project needs, tagged with
/// its origin and importance. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill_id: String,
    pub skill_name: String,
    pub category: String,
    pub source: SkillSource,
    pub importance: Importance,
}

/// Resolve the de-duplicated required skills for one project.
///
/// Solution-derived entries come first (in association order), then
/// project-specific entries, so the output is deterministic. When the
/// same skill appears from both sources the project-specific tag wins its
/// slot in place; among same-source duplicates the higher importance is
/// kept. Skill ids absent from the catalog, and associations pointing at
/// unknown solutions, are stale references and are dropped.
pub fn resolve_required_skills(
    project_id: &str,
    project_skills: &[ProjectSkill],
    solutions: &[Solution],
    catalog: &SkillCatalog,
    project_solutions: &[ProjectSolution],
) -> Vec<RequiredSkill> {
    let solutions_by_id: HashMap<&str, &Solution> =
        solutions.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut resolved: Vec<RequiredSkill> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for link in project_solutions.iter().filter(|l| l.project_id == project_id) {
        let Some(solution) = solutions_by_id.get(link.solution_id.as_str()) else {
            continue;
        };
        for skill_id in &solution.skills {
            merge(
                &mut resolved,
                &mut index,
                catalog,
                skill_id,
                SkillSource::Solution,
                link.importance,
            );
        }
    }

    for entry in project_skills.iter().filter(|e| e.project_id == project_id) {
        merge(
            &mut resolved,
            &mut index,
            catalog,
            &entry.skill_id,
            SkillSource::Project,
            entry.importance,
        );
    }

    debug!(
        project_id,
        required = resolved.len(),
        "resolved project skill requirements"
    );

    resolved
}

fn merge(
    resolved: &mut Vec<RequiredSkill>,
    index: &mut HashMap<String, usize>,
    catalog: &SkillCatalog,
    skill_id: &str,
    source: SkillSource,
    importance: Importance,
) {
    // Stale skill ids are dropped: the catalog is the authority.
    let Some(skill) = catalog.get(skill_id) else {
        return;
    };

    match index.get(skill_id) {
        Some(&i) => {
            let existing = &mut resolved[i];
            let override_source =
                source == SkillSource::Project && existing.source == SkillSource::Solution;
            if override_source || (source == existing.source && importance > existing.importance) {
                existing.source = source;
                existing.importance = importance;
            }
        }
        None => {
            index.insert(skill_id.to_string(), resolved.len());
            resolved.push(RequiredSkill {
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                category: skill.category.clone(),
                source,
                importance,
            });
        }
    }
}

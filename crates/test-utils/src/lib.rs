//! Shared test fixtures for crewmatch crates.
//!
//! Provides terse builders for the domain types plus a small fixture
//! organization (six catalog skills, four teams) reused across the
//! engine's unit and integration tests.

use crewmatch_model::{
    Importance, Person, PersonSkill, ProficiencyLevel, ProjectSkill, ProjectSolution, Skill,
    SkillCatalog, Solution, Team,
};

/// Build a catalog skill.
pub fn skill(id: &str, name: &str, category: &str) -> Skill {
    Skill {
        id: id.into(),
        name: name.into(),
        category: category.into(),
    }
}

/// Build a team with declared target skills.
pub fn team(id: &str, name: &str, skills: &[&str]) -> Team {
    Team {
        id: id.into(),
        name: name.into(),
        target_skills: skills.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Build a solution bundle.
pub fn solution(id: &str, name: &str, category: &str, skills: &[&str]) -> Solution {
    Solution {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        skills: skills.iter().map(|s| (*s).to_string()).collect(),
    }
}

/// Build an active person on a team.
pub fn person(id: &str, name: &str, team_id: &str) -> Person {
    Person {
        id: id.into(),
        name: name.into(),
        team_id: team_id.into(),
        active: true,
    }
}

/// Build an inactive person on a team.
pub fn inactive_person(id: &str, name: &str, team_id: &str) -> Person {
    Person {
        active: false,
        ..person(id, name, team_id)
    }
}

/// Build a person/skill row.
pub fn person_skill(person_id: &str, skill_id: &str) -> PersonSkill {
    PersonSkill {
        person_id: person_id.into(),
        skill_id: skill_id.into(),
        proficiency: ProficiencyLevel::Intermediate,
        years_of_experience: 2.0,
    }
}

/// Build a project-specific skill requirement.
pub fn project_skill(project_id: &str, skill_id: &str, importance: Importance) -> ProjectSkill {
    ProjectSkill {
        project_id: project_id.into(),
        skill_id: skill_id.into(),
        importance,
    }
}

/// Build a project/solution association.
pub fn project_solution(
    project_id: &str,
    solution_id: &str,
    importance: Importance,
) -> ProjectSolution {
    ProjectSolution {
        project_id: project_id.into(),
        solution_id: solution_id.into(),
        importance,
    }
}

/// Six-skill catalog used throughout the engine tests.
///
/// React, TypeScript, and Vue.js share the Frontend category so that
/// category-level matching has something to find; Docker sits alone in
/// DevOps so that it never category-matches a frontend/backend team.
pub fn fixture_catalog() -> SkillCatalog {
    SkillCatalog::new([
        skill("react", "React", "Frontend"),
        skill("typescript", "TypeScript", "Frontend"),
        skill("vue", "Vue.js", "Frontend"),
        skill("node", "Node.js", "Backend"),
        skill("python", "Python", "Language"),
        skill("docker", "Docker", "DevOps"),
    ])
}

/// Four teams over the fixture catalog. No team holds Vue.js.
pub fn fixture_teams() -> Vec<Team> {
    vec![
        team("web", "Web", &["react", "typescript"]),
        team("platform", "Platform", &["react", "node", "typescript"]),
        team("infra", "Infrastructure", &["docker", "python"]),
        team("data", "Data", &["python", "node"]),
    ]
}

//! Domain types for crewmatch compatibility analysis.
//!
//! Everything here is plain reference data handed to the engine by the
//! caller: the skill catalog, team and staffing snapshots, reusable
//! solutions, and the project association rows that tie them together.
//! The engine never mutates these; each analysis re-derives its results
//! from whatever snapshot it is given.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A catalog skill: immutable reference data owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable skill id.
    pub id: String,
    /// Display name (e.g. "React").
    pub name: String,
    /// Category tag (e.g. "Frontend", "Backend", "DevOps").
    pub category: String,
}

/// Indexed, read-only lookup over the skill catalog.
///
/// Construction dedups by id; the first occurrence of an id wins.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
    by_id: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Build a catalog from a list of skills.
    pub fn new(skills: impl IntoIterator<Item = Skill>) -> Self {
        let mut catalog = Self::default();
        for skill in skills {
            if !catalog.by_id.contains_key(&skill.id) {
                catalog.by_id.insert(skill.id.clone(), catalog.skills.len());
                catalog.skills.push(skill);
            }
        }
        catalog
    }

    /// Look up a skill by id.
    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.by_id.get(id).map(|&i| &self.skills[i])
    }

    /// Iterate skills in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    /// Number of skills in the catalog.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Distinct categories present, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.skills.iter().map(|s| s.category.as_str()).collect()
    }
}

impl FromIterator<Skill> for SkillCatalog {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A delivery team and its declared target skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Stable team id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared skill ids. May be empty; person data can still supply
    /// coverage for a team with no declared skills.
    #[serde(default)]
    pub target_skills: BTreeSet<String>,
}

/// A staffed person. Only active people contribute to their team's
/// effective skill set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    /// The team this person belongs to.
    pub team_id: String,
    /// Inactive people (on leave, departed) are ignored by the engine.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Self-reported proficiency for a person/skill pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A skill held by an individual person. Augments the team's declared
/// skills when person data is supplied; never replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSkill {
    pub person_id: String,
    pub skill_id: String,
    pub proficiency: ProficiencyLevel,
    #[serde(default)]
    pub years_of_experience: f64,
}

/// A reusable technology/methodology bundle carrying an intrinsic skill
/// requirement, attachable to multiple projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Skills this solution requires of any team delivering it.
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

/// A project to be staffed. Requirements come from association rows, not
/// from fields on the project itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Requirement weight on an association row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

/// Links a project to a solution it will deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSolution {
    pub project_id: String,
    pub solution_id: String,
    pub importance: Importance,
}

/// A project-specific skill requirement not covered by any solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSkill {
    pub project_id: String,
    pub skill_id: String,
    pub importance: Importance,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: &str, name: &str, category: &str) -> Skill {
        Skill {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    #[test]
    fn catalog_lookup() {
        let catalog = SkillCatalog::new([
            skill("react", "React", "Frontend"),
            skill("node", "Node.js", "Backend"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("react").unwrap().name, "React");
        assert!(catalog.get("vue").is_none());
    }

    #[test]
    fn catalog_dedups_first_wins() {
        let catalog = SkillCatalog::new([
            skill("react", "React", "Frontend"),
            skill("react", "React (duplicate)", "Frontend"),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("react").unwrap().name, "React");
    }

    #[test]
    fn catalog_categories_sorted_distinct() {
        let catalog = SkillCatalog::new([
            skill("react", "React", "Frontend"),
            skill("vue", "Vue.js", "Frontend"),
            skill("node", "Node.js", "Backend"),
        ]);

        let categories: Vec<&str> = catalog.categories().into_iter().collect();
        assert_eq!(categories, vec!["Backend", "Frontend"]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = SkillCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn importance_ordering() {
        assert!(Importance::Low < Importance::Medium);
        assert!(Importance::Medium < Importance::High);
    }

    #[test]
    fn importance_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Importance::High).unwrap(), "\"high\"");
        let parsed: Importance = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Importance::Medium);
    }

    #[test]
    fn person_active_defaults_true() {
        let parsed: Person =
            serde_json::from_str(r#"{"id":"p1","name":"Ada","team_id":"t1"}"#).unwrap();
        assert!(parsed.active);
    }

    #[test]
    fn team_serde_roundtrip() {
        let team = Team {
            id: "t1".into(),
            name: "Platform".into(),
            target_skills: ["react".to_string(), "node".to_string()].into(),
        };
        let json = serde_json::to_string(&team).unwrap();
        let parsed: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(team, parsed);
    }
}

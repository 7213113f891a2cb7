//! Tiered compatibility scoring.

use super::{explainer, CompatibilityResult, MatchType, RecommendationLevel, SkillMatch};
use crate::config::EngineConfig;
use crate::requirements::RequiredSkill;
use crewmatch_model::{Person, PersonSkill, SkillCatalog, Team};
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Scores teams against resolved requirement sets.
///
/// Borrows the catalog and, optionally, person-level staffing snapshots.
/// Person skills augment a team's declared target skills; they never
/// replace them.
#[derive(Debug)]
pub struct CompatibilityScorer<'a> {
    catalog: &'a SkillCatalog,
    config: EngineConfig,
    people: &'a [Person],
    person_skills: &'a [PersonSkill],
}

impl<'a> CompatibilityScorer<'a> {
    /// Create a scorer over a catalog with the given calibration.
    pub fn new(catalog: &'a SkillCatalog, config: EngineConfig) -> Self {
        Self {
            catalog,
            config,
            people: &[],
            person_skills: &[],
        }
    }

    /// Attach person-level staffing data.
    pub fn with_people(mut self, people: &'a [Person], person_skills: &'a [PersonSkill]) -> Self {
        self.people = people;
        self.person_skills = person_skills;
        self
    }

    /// A team's effective skill set: declared target skills unioned with
    /// the skills of its active members.
    pub fn effective_skills(&self, team: &Team) -> BTreeSet<String> {
        let mut effective = team.target_skills.clone();

        let members: HashSet<&str> = self
            .people
            .iter()
            .filter(|p| p.active && p.team_id == team.id)
            .map(|p| p.id.as_str())
            .collect();

        if !members.is_empty() {
            for ps in self.person_skills {
                if members.contains(ps.person_id.as_str()) {
                    effective.insert(ps.skill_id.clone());
                }
            }
        }

        effective
    }

    /// Score one team against a resolved requirement set.
    ///
    /// Exact matches earn full credit and count as matched; category
    /// matches earn `category_match_credit` but still count toward the
    /// gap. With nothing required the score is forced to zero.
    pub fn score(
        &self,
        team: &Team,
        required: &[RequiredSkill],
        project_id: Option<&str>,
    ) -> CompatibilityResult {
        let effective = self.effective_skills(team);
        let held_categories: BTreeSet<&str> = effective
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .map(|s| s.category.as_str())
            .collect();

        let mut credit = 0.0;
        let mut matched = 0usize;
        let mut skill_matches = Vec::with_capacity(required.len());

        for req in required {
            let match_type = if effective.contains(&req.skill_id) {
                credit += 1.0;
                matched += 1;
                MatchType::Exact
            } else if held_categories.contains(req.category.as_str()) {
                credit += self.config.category_match_credit;
                MatchType::Category
            } else {
                MatchType::None
            };
            skill_matches.push(SkillMatch {
                skill_id: req.skill_id.clone(),
                skill_name: req.skill_name.clone(),
                match_type,
            });
        }

        let skills_required = required.len();
        let compatibility_score = if skills_required == 0 {
            0.0
        } else {
            (credit / skills_required as f64).clamp(0.0, 1.0)
        };
        let recommendation = RecommendationLevel::from_score(compatibility_score);
        let reasoning = explainer::build_reasoning(compatibility_score, recommendation, &skill_matches);

        trace!(
            team_id = %team.id,
            score = compatibility_score,
            matched,
            required = skills_required,
            "scored team against requirements"
        );

        CompatibilityResult {
            team_id: team.id.clone(),
            project_id: project_id.map(str::to_string),
            skills_required,
            skills_matched: matched,
            skills_gap: skills_required - matched,
            compatibility_score,
            skill_matches,
            recommendation,
            reasoning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::SkillSource;
    use crewmatch_model::Importance;
    use crewmatch_test_utils::{fixture_catalog, inactive_person, person, person_skill, team};

    fn required(catalog: &SkillCatalog, ids: &[&str]) -> Vec<RequiredSkill> {
        ids.iter()
            .map(|id| {
                let skill = catalog.get(id).expect("fixture skill");
                RequiredSkill {
                    skill_id: skill.id.clone(),
                    skill_name: skill.name.clone(),
                    category: skill.category.clone(),
                    source: SkillSource::Project,
                    importance: Importance::High,
                }
            })
            .collect()
    }

    #[test]
    fn exact_and_category_matches() {
        // React + TypeScript team vs React, TypeScript, Vue.js: Vue.js
        // category-matches via the shared Frontend category.
        let catalog = fixture_catalog();
        let scorer = CompatibilityScorer::new(&catalog, EngineConfig::default());
        let team = team("web", "Web", &["react", "typescript"]);
        let reqs = required(&catalog, &["react", "typescript", "vue"]);

        let result = scorer.score(&team, &reqs, Some("p1"));

        assert_eq!(result.skills_required, 3);
        assert_eq!(result.skills_matched, 2);
        assert_eq!(result.skills_gap, 1);
        assert_eq!(result.skill_matches[2].match_type, MatchType::Category);
        let expected = (2.0 + EngineConfig::default().category_match_credit) / 3.0;
        assert!((result.compatibility_score - expected).abs() < 1e-9);
        assert!(matches!(
            result.recommendation,
            RecommendationLevel::Good | RecommendationLevel::Fair
        ));
    }

    #[test]
    fn three_of_four_exact_scores_exactly_three_quarters() {
        let catalog = fixture_catalog();
        let scorer = CompatibilityScorer::new(&catalog, EngineConfig::default());
        let team = team("platform", "Platform", &["react", "node", "typescript"]);
        let reqs = required(&catalog, &["react", "typescript", "node", "docker"]);

        let result = scorer.score(&team, &reqs, Some("p1"));

        assert_eq!(result.skills_matched, 3);
        assert_eq!(result.skills_gap, 1);
        assert_eq!(result.compatibility_score, 0.75);
        assert_eq!(result.skill_matches[3].match_type, MatchType::None);
        assert_eq!(result.recommendation, RecommendationLevel::Good);
        assert_eq!(result.reasoning[0], "Good skill compatibility (75%)");
        assert_eq!(result.reasoning[1], "Strong in: React, TypeScript, Node.js");
        assert_eq!(result.reasoning[2], "Missing: Docker");
    }

    #[test]
    fn zero_requirements_is_zero_score_not_perfect() {
        let catalog = fixture_catalog();
        let scorer = CompatibilityScorer::new(&catalog, EngineConfig::default());
        let team = team("web", "Web", &["react"]);

        let result = scorer.score(&team, &[], Some("p1"));

        assert_eq!(result.skills_required, 0);
        assert_eq!(result.compatibility_score, 0.0);
        assert_eq!(result.skills_gap, 0);
        assert_eq!(result.recommendation, RecommendationLevel::Poor);
    }

    #[test]
    fn empty_team_skill_set_scores_zero() {
        let catalog = fixture_catalog();
        let scorer = CompatibilityScorer::new(&catalog, EngineConfig::default());
        let team = team("empty", "Empty", &[]);
        let reqs = required(&catalog, &["react", "docker"]);

        let result = scorer.score(&team, &reqs, None);

        assert_eq!(result.compatibility_score, 0.0);
        assert_eq!(result.skills_gap, 2);
        assert!(result
            .skill_matches
            .iter()
            .all(|m| m.match_type == MatchType::None));
    }

    #[test]
    fn active_member_skills_augment_declared_skills() {
        let catalog = fixture_catalog();
        let people = vec![person("ada", "Ada", "web")];
        let skills = vec![person_skill("ada", "vue")];
        let scorer =
            CompatibilityScorer::new(&catalog, EngineConfig::default()).with_people(&people, &skills);
        let team = team("web", "Web", &["react"]);
        let reqs = required(&catalog, &["react", "vue"]);

        let result = scorer.score(&team, &reqs, None);

        assert_eq!(result.skills_matched, 2);
        assert_eq!(result.compatibility_score, 1.0);
    }

    #[test]
    fn inactive_member_skills_are_ignored() {
        let catalog = fixture_catalog();
        let people = vec![inactive_person("bob", "Bob", "web")];
        let skills = vec![person_skill("bob", "vue")];
        let scorer =
            CompatibilityScorer::new(&catalog, EngineConfig::default()).with_people(&people, &skills);
        let team = team("web", "Web", &["react"]);

        let effective = scorer.effective_skills(&team);
        assert!(!effective.contains("vue"));
    }

    #[test]
    fn other_teams_members_do_not_leak() {
        let catalog = fixture_catalog();
        let people = vec![person("cara", "Cara", "infra")];
        let skills = vec![person_skill("cara", "docker")];
        let scorer =
            CompatibilityScorer::new(&catalog, EngineConfig::default()).with_people(&people, &skills);
        let team = team("web", "Web", &["react"]);

        assert!(!scorer.effective_skills(&team).contains("docker"));
    }

    #[test]
    fn uncataloged_team_skills_contribute_no_category() {
        let catalog = fixture_catalog();
        let scorer = CompatibilityScorer::new(&catalog, EngineConfig::default());
        // "cobol" is not in the catalog; it must not category-match anything.
        let team = team("legacy", "Legacy", &["cobol"]);
        let reqs = required(&catalog, &["react"]);

        let result = scorer.score(&team, &reqs, None);
        assert_eq!(result.skill_matches[0].match_type, MatchType::None);
    }
}

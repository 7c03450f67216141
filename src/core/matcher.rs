use crate::core::{
    rules::{check_parent_child_potential, check_sibling_potential},
    similarity::name_similarity,
};
use crate::models::{MatchResult, MatcherConfig, Person, Relationship, RelationshipFinding};

/// Main matching orchestrator
///
/// Holds an immutable configuration and evaluates every rule for each
/// pair of people:
/// 1. Sibling rule (symmetric)
/// 2. Parent/child rule, first person as parent
/// 3. Parent/child rule, second person as parent (labelled `child-parent`)
///
/// Every call is a pure function of its inputs and the configuration, so a
/// single matcher can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct FamilyMatcher {
    config: MatcherConfig,
}

impl FamilyMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Blended 70/30 surname/full-name similarity between two people
    pub fn calculate_name_similarity<Id>(&self, a: &Person<Id>, b: &Person<Id>) -> f64 {
        name_similarity(a, b)
    }

    pub fn check_sibling_potential<Id>(&self, a: &Person<Id>, b: &Person<Id>) -> RelationshipFinding {
        check_sibling_potential(a, b, &self.config)
    }

    pub fn check_parent_child_potential<Id>(
        &self,
        parent: &Person<Id>,
        child: &Person<Id>,
    ) -> RelationshipFinding {
        check_parent_child_potential(parent, child, &self.config)
    }

    /// Every relationship with a non-zero score between two people
    ///
    /// Findings come back in evaluation order: sibling, parent-child,
    /// child-parent. Two records sharing an identifier are never compared.
    pub fn find_possible_relationships<Id: PartialEq>(
        &self,
        a: &Person<Id>,
        b: &Person<Id>,
    ) -> Vec<RelationshipFinding> {
        if a.id == b.id {
            return Vec::new();
        }

        let candidates = [
            self.check_sibling_potential(a, b),
            self.check_parent_child_potential(a, b),
            self.check_parent_child_potential(b, a)
                .relabeled(Relationship::ChildParent),
        ];

        candidates
            .into_iter()
            .filter(|finding| finding.score > 0.0)
            .collect()
    }

    /// Rank a pool of people by their strongest relationship to `target`
    ///
    /// # Arguments
    /// * `target` - The person to find relatives for
    /// * `pool` - Candidates, in caller order; `target` itself is skipped
    ///
    /// # Returns
    /// One result per candidate with any non-zero finding, sorted by
    /// descending score. Equal scores keep pool order.
    pub fn find_family_matches<'a, Id, I>(
        &self,
        target: &Person<Id>,
        pool: I,
    ) -> Vec<MatchResult<'a, Id>>
    where
        Id: PartialEq + 'a,
        I: IntoIterator<Item = &'a Person<Id>>,
    {
        let mut evaluated = 0usize;

        let mut matches: Vec<MatchResult<'a, Id>> = pool
            .into_iter()
            .inspect(|_| evaluated += 1)
            .filter_map(|person| {
                let best = best_finding(self.find_possible_relationships(target, person))?;

                tracing::trace!(
                    "Candidate {} {}: {} ({:.2})",
                    person.first_name,
                    person.last_name,
                    best.relationship,
                    best.score
                );

                Some(MatchResult {
                    person,
                    finding: best,
                })
            })
            .collect();

        // Stable sort, descending score
        matches.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Found {} family matches for {} {} among {} candidates",
            matches.len(),
            target.first_name,
            target.last_name,
            evaluated
        );

        matches
    }
}

/// Highest-scoring finding; the earliest one wins a tie
fn best_finding(findings: Vec<RelationshipFinding>) -> Option<RelationshipFinding> {
    findings.into_iter().reduce(|best, current| {
        if current.score > best.score {
            current
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_person(id: u64, first: &str, last: &str, age: u32, location: &str) -> Person {
        Person::new(id, first, last, age, location)
    }

    fn sample_people() -> Vec<Person> {
        vec![
            create_person(1, "John", "Smith", 45, "New York"),
            create_person(2, "Jane", "Smith", 42, "New York"),
            create_person(3, "Michael", "Smith", 15, "New York"),
            create_person(4, "Emily", "Smith", 13, "New York"),
            create_person(5, "Robert", "Johnson", 70, "Chicago"),
            create_person(8, "Maria", "Garcia", 35, "Miami"),
        ]
    }

    #[test]
    fn test_same_identifier_is_vacuous() {
        let matcher = FamilyMatcher::with_default_config();
        let emily = create_person(4, "Emily", "Smith", 13, "New York");
        let duplicate = create_person(4, "Emma", "Smith", 14, "New York");

        assert!(matcher.find_possible_relationships(&emily, &emily).is_empty());
        assert!(matcher.find_possible_relationships(&emily, &duplicate).is_empty());
    }

    #[test]
    fn test_relationships_in_evaluation_order() {
        let matcher = FamilyMatcher::with_default_config();
        let emily = create_person(4, "Emily", "Smith", 13, "New York");
        let john = create_person(1, "John", "Smith", 45, "New York");

        let findings = matcher.find_possible_relationships(&emily, &john);
        let labels: Vec<_> = findings.iter().map(|f| f.relationship).collect();

        assert_eq!(
            labels,
            vec![
                Relationship::Sibling,
                Relationship::ParentChild,
                Relationship::ChildParent
            ]
        );
        // John is the parent, so the reversed direction carries the age evidence
        assert!((findings[2].score - 1.0).abs() < 1e-9);
        assert!((findings[1].score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_zero_score_findings_dropped() {
        let matcher = FamilyMatcher::with_default_config();
        let emily = create_person(4, "Emily", "Smith", 13, "New York");
        let robert = create_person(5, "Robert", "Johnson", 70, "Chicago");

        assert!(matcher.find_possible_relationships(&emily, &robert).is_empty());
    }

    #[test]
    fn test_find_family_matches_ranking() {
        let matcher = FamilyMatcher::with_default_config();
        let people = sample_people();
        let target = &people[3];

        let matches = matcher.find_family_matches(target, people.iter().filter(|p| p.id != target.id));

        let ids: Vec<u64> = matches.iter().map(|m| m.person.id).collect();
        // John, Jane (child-parent 1.0) and Michael (sibling 1.0) tie; pool order holds
        assert_eq!(&ids[..3], &[1, 2, 3]);
        assert_eq!(matches[0].relationship(), Relationship::ChildParent);
        assert_eq!(matches[2].relationship(), Relationship::Sibling);
        assert!(!ids.contains(&5));

        for pair in matches.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
    }

    #[test]
    fn test_target_in_pool_is_skipped() {
        let matcher = FamilyMatcher::with_default_config();
        let people = sample_people();

        let matches = matcher.find_family_matches(&people[3], &people);
        assert!(matches.iter().all(|m| m.person.id != 4));
    }

    #[test]
    fn test_tie_prefers_first_evaluated() {
        let findings = vec![
            RelationshipFinding::new(Relationship::Sibling, 0.5, vec![]),
            RelationshipFinding::new(Relationship::ParentChild, 0.5, vec![]),
            RelationshipFinding::new(Relationship::ChildParent, 0.4, vec![]),
        ];

        let best = best_finding(findings).unwrap();
        assert_eq!(best.relationship, Relationship::Sibling);
    }

    #[test]
    fn test_empty_pool() {
        let matcher = FamilyMatcher::with_default_config();
        let emily = create_person(4, "Emily", "Smith", 13, "New York");

        let pool: Vec<Person> = Vec::new();
        let matches = matcher.find_family_matches(&emily, &pool);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_string_identifiers() {
        let matcher = FamilyMatcher::with_default_config();
        let a = Person::new("a".to_string(), "Ana", "Ruiz", 30, "Lima");
        let b = Person::new("b".to_string(), "Luis", "Ruiz", 28, "Lima");

        let pool = vec![b];
        let matches = matcher.find_family_matches(&a, &pool);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].person.id, "b");
    }
}

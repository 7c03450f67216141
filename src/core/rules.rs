use crate::core::similarity::surname_similarity;
use crate::models::{MatcherConfig, Person, Relationship, RelationshipFinding};

/// Check whether two people might be siblings
///
/// Each satisfied check adds its weight independently:
/// surname similarity, absolute age gap, exact location.
/// Never inspects which person comes first, so the score is symmetric.
pub fn check_sibling_potential<Id>(
    a: &Person<Id>,
    b: &Person<Id>,
    config: &MatcherConfig,
) -> RelationshipFinding {
    let weights = &config.weights.sibling;
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let Some(reason) = surname_evidence(a, b, config) {
        score += weights.surname;
        reasons.push(reason);
    }

    let age_diff = a.age.abs_diff(b.age);
    if age_diff <= config.sibling_max_age_gap {
        score += weights.age;
        reasons.push(format!(
            "Age difference ({} years) consistent with siblings",
            age_diff
        ));
    }

    if let Some(reason) = location_evidence(a, b, config) {
        score += weights.location;
        reasons.push(reason);
    }

    RelationshipFinding::new(Relationship::Sibling, score, reasons)
}

/// Check whether `parent` might be a parent of `child`
///
/// Direction matters: the age check requires `parent` to be older by an
/// amount inside the configured window. The finding is always labelled
/// `ParentChild`; callers testing the reverse direction relabel it.
pub fn check_parent_child_potential<Id>(
    parent: &Person<Id>,
    child: &Person<Id>,
    config: &MatcherConfig,
) -> RelationshipFinding {
    let weights = &config.weights.parent_child;
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let Some(reason) = surname_evidence(parent, child, config) {
        score += weights.surname;
        reasons.push(reason);
    }

    let age_diff = i64::from(parent.age) - i64::from(child.age);
    if config.parent_child_age_gap.contains(age_diff) {
        score += weights.age;
        reasons.push(format!(
            "Age difference ({} years) consistent with parent-child",
            age_diff
        ));
    }

    if let Some(reason) = location_evidence(parent, child, config) {
        score += weights.location;
        reasons.push(reason);
    }

    RelationshipFinding::new(Relationship::ParentChild, score, reasons)
}

fn surname_evidence<Id>(a: &Person<Id>, b: &Person<Id>, config: &MatcherConfig) -> Option<String> {
    let similarity = surname_similarity(a, b);
    (similarity >= config.surname_similarity_threshold)
        .then(|| format!("Same surname ({}% match)", (similarity * 100.0).round() as u32))
}

/// Exact, case-sensitive location agreement. Contributes nothing when
/// exact location matching is disabled.
fn location_evidence<Id>(a: &Person<Id>, b: &Person<Id>, config: &MatcherConfig) -> Option<String> {
    (config.location_exact_required && a.location == b.location).then(|| "Same location".to_string())
}

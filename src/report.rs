use crate::models::{MatchResult, Person};
use std::fmt::Display;

const RULE_WIDTH: usize = 70;

/// Plain-text report of ranked matches for a target person
///
/// One block per match: name with age and location, relationship with a
/// two-decimal score, then the comma-separated reasons.
pub fn format_match_report<Id>(target: &Person<Id>, matches: &[MatchResult<'_, Id>]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut report = format!(
        "\nPotential family matches for {}:\n{}\n",
        target.full_name(),
        rule
    );

    if matches.is_empty() {
        report.push_str("No family matches found\n");
        report.push_str(&rule);
        report.push('\n');
        return report;
    }

    for (index, m) in matches.iter().enumerate() {
        report.push_str(&format!(
            "Match #{}: {} ({}, {})\n",
            index + 1,
            m.person.full_name(),
            m.person.age,
            m.person.location
        ));
        report.push_str(&format!(
            "Relationship: {} (Score: {:.2})\n",
            m.relationship(),
            m.score()
        ));
        report.push_str(&format!("Reasons: {}\n", m.finding.reasons.join(", ")));
        report.push_str(&rule);
        report.push('\n');
    }

    report
}

/// Short one-line label for a person, used in logs
pub fn describe<Id: Display>(person: &Person<Id>) -> String {
    format!("#{} {}", person.id, person.full_name())
}

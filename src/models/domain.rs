use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Identifier type used by the hosting service and the bundled dataset
pub type PersonId = u64;

/// Findings at or above this score are flagged as likely relationships
pub const LIKELY_SCORE_THRESHOLD: f64 = 0.7;

/// Person record as supplied by the caller
///
/// The engine only ever borrows people; identifiers are expected to be
/// unique within a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person<Id = PersonId> {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub location: String,
}

impl<Id> Person<Id> {
    pub fn new(
        id: Id,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            location: location.into(),
        }
    }

    /// "first last", as used by the blended name similarity
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Relationship label attached to a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Sibling,
    /// The first person of the pair is the candidate parent
    ParentChild,
    /// The second person of the pair is the candidate parent
    ChildParent,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Sibling => "sibling",
            Relationship::ParentChild => "parent-child",
            Relationship::ChildParent => "child-parent",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one relationship rule on a pair of people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipFinding {
    pub relationship: Relationship,
    pub score: f64,
    /// Evidence trail in the order the checks ran: surname, age, location
    pub reasons: Vec<String>,
    pub is_likely: bool,
}

impl RelationshipFinding {
    pub fn new(relationship: Relationship, score: f64, reasons: Vec<String>) -> Self {
        Self {
            relationship,
            score,
            reasons,
            is_likely: score >= LIKELY_SCORE_THRESHOLD,
        }
    }

    /// Same evidence under a different label
    pub fn relabeled(self, relationship: Relationship) -> Self {
        Self {
            relationship,
            ..self
        }
    }
}

/// Best finding for one pool member, merged with that member
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a, Id = PersonId> {
    pub person: &'a Person<Id>,
    #[serde(flatten)]
    pub finding: RelationshipFinding,
}

impl<'a, Id> MatchResult<'a, Id> {
    #[inline]
    pub fn score(&self) -> f64 {
        self.finding.score
    }

    #[inline]
    pub fn relationship(&self) -> Relationship {
        self.finding.relationship
    }

    #[inline]
    pub fn is_likely(&self) -> bool {
        self.finding.is_likely
    }
}

/// Admissible parent-minus-child age difference, in years, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_age_gap_order"))]
pub struct AgeGapRange {
    pub min: u32,
    pub max: u32,
}

impl AgeGapRange {
    #[inline]
    pub fn contains(&self, signed_diff: i64) -> bool {
        signed_diff >= i64::from(self.min) && signed_diff <= i64::from(self.max)
    }
}

impl Default for AgeGapRange {
    fn default() -> Self {
        Self { min: 15, max: 50 }
    }
}

fn validate_age_gap_order(range: &AgeGapRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        let mut err = ValidationError::new("age_gap_order");
        err.message = Some("parent/child age gap min must not exceed max".into());
        return Err(err);
    }
    Ok(())
}

/// Score increments awarded by one rule for each satisfied check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_finite_weights"))]
pub struct ScoreWeights {
    #[validate(range(min = 0.0))]
    pub surname: f64,
    #[validate(range(min = 0.0))]
    pub age: f64,
    #[validate(range(min = 0.0))]
    pub location: f64,
}

impl ScoreWeights {
    pub const SIBLING: ScoreWeights = ScoreWeights {
        surname: 0.5,
        age: 0.3,
        location: 0.2,
    };

    pub const PARENT_CHILD: ScoreWeights = ScoreWeights {
        surname: 0.4,
        age: 0.4,
        location: 0.2,
    };

    pub fn sum(&self) -> f64 {
        self.surname + self.age + self.location
    }
}

fn validate_finite_weights(weights: &ScoreWeights) -> Result<(), ValidationError> {
    require_finite(&[weights.surname, weights.age, weights.location])
}

/// Range validators let NaN through; reject it and infinities explicitly
fn require_finite(values: &[f64]) -> Result<(), ValidationError> {
    if values.iter().all(|value| value.is_finite()) {
        return Ok(());
    }
    let mut err = ValidationError::new("non_finite");
    err.message = Some("weights and thresholds must be finite numbers".into());
    Err(err)
}

/// A weight group as written in config, where each check may be omitted
#[derive(Deserialize)]
struct PartialScoreWeights {
    surname: Option<f64>,
    age: Option<f64>,
    location: Option<f64>,
}

impl PartialScoreWeights {
    fn or(self, defaults: ScoreWeights) -> ScoreWeights {
        ScoreWeights {
            surname: self.surname.unwrap_or(defaults.surname),
            age: self.age.unwrap_or(defaults.age),
            location: self.location.unwrap_or(defaults.location),
        }
    }
}

fn deserialize_sibling_weights<'de, D>(deserializer: D) -> Result<ScoreWeights, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialScoreWeights::deserialize(deserializer)?.or(ScoreWeights::SIBLING))
}

fn deserialize_parent_child_weights<'de, D>(deserializer: D) -> Result<ScoreWeights, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialScoreWeights::deserialize(deserializer)?.or(ScoreWeights::PARENT_CHILD))
}

/// Per-rule score increments
///
/// Omitted groups, and omitted checks inside a group, keep that rule's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RuleWeights {
    #[serde(deserialize_with = "deserialize_sibling_weights")]
    #[validate(nested)]
    pub sibling: ScoreWeights,
    #[serde(alias = "parentChild", deserialize_with = "deserialize_parent_child_weights")]
    #[validate(nested)]
    pub parent_child: ScoreWeights,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            sibling: ScoreWeights::SIBLING,
            parent_child: ScoreWeights::PARENT_CHILD,
        }
    }
}

/// Matcher thresholds, fixed for the lifetime of a `FamilyMatcher`
///
/// Every omitted option falls back to its default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_finite_thresholds"))]
pub struct MatcherConfig {
    /// Reserved for a full-name check; no current rule reads it
    #[serde(alias = "nameSimilarityThreshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub name_similarity_threshold: f64,
    #[serde(alias = "surnameSimilarityThreshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub surname_similarity_threshold: f64,
    /// When false, location never contributes to any score
    #[serde(alias = "locationExactRequired")]
    pub location_exact_required: bool,
    #[serde(alias = "siblingMaxAgeGap")]
    pub sibling_max_age_gap: u32,
    #[serde(alias = "parentChildAgeGap")]
    #[validate(nested)]
    pub parent_child_age_gap: AgeGapRange,
    #[validate(nested)]
    pub weights: RuleWeights,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            name_similarity_threshold: 0.7,
            surname_similarity_threshold: 0.8,
            location_exact_required: true,
            sibling_max_age_gap: 15,
            parent_child_age_gap: AgeGapRange::default(),
            weights: RuleWeights::default(),
        }
    }
}

fn validate_finite_thresholds(config: &MatcherConfig) -> Result<(), ValidationError> {
    require_finite(&[
        config.name_similarity_threshold,
        config.surname_similarity_threshold,
    ])
}

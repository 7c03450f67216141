// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeGapRange, MatchResult, MatcherConfig, Person, PersonId, Relationship, RelationshipFinding,
    RuleWeights, ScoreWeights, LIKELY_SCORE_THRESHOLD,
};
pub use requests::{FindMatchesRequest, RelationshipsRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, PeopleResponse, RelationshipsResponse};

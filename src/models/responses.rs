use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, Person, RelationshipFinding};

/// Response for the find matches endpoints
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the pairwise relationships endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipsResponse {
    pub relationships: Vec<RelationshipFinding>,
}

/// Loaded dataset listing
#[derive(Debug, Clone, Serialize)]
pub struct PeopleResponse<'a> {
    pub people: &'a [Person],
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

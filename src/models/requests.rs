use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Person;

/// Request to rank a caller-supplied pool against a target person
///
/// Both fields are optional at the serde level so that a missing one is
/// reported as a validation failure rather than a JSON parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(required)]
    #[serde(alias = "target_person", rename = "targetPerson", default)]
    pub target_person: Option<Person>,
    #[validate(required)]
    #[serde(alias = "people_pool", rename = "peoplePool", default)]
    pub people_pool: Option<Vec<Person>>,
}

/// Request for every relationship finding between two people
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RelationshipsRequest {
    #[validate(required)]
    #[serde(alias = "person_a", rename = "personA", default)]
    pub person_a: Option<Person>,
    #[validate(required)]
    #[serde(alias = "person_b", rename = "personB", default)]
    pub person_b: Option<Person>,
}

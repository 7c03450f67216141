//! Kinship Matcher - rule-based family relationship matching
//!
//! This library scores pairs of person records as possible siblings or
//! parent/child pairs, and ranks a pool of people against a target person.
//! Scores combine fuzzy surname similarity, age-gap windows and exact
//! location agreement.

pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FamilyMatcher, similarity::{compare_strings, name_similarity}};
pub use models::{Person, Relationship, RelationshipFinding, MatchResult, MatcherConfig, AgeGapRange, RuleWeights};
pub use services::PeopleDataset;

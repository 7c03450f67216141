// Core algorithm exports
pub mod matcher;
pub mod rules;
pub mod similarity;

pub use matcher::FamilyMatcher;
pub use rules::{check_parent_child_potential, check_sibling_potential};
pub use similarity::{compare_strings, name_similarity, surname_similarity};

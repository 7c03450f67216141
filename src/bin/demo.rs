//! Prints the ranked family matches for one person of a dataset file.
//!
//! Usage: kinship-demo [DATASET] [PERSON_ID]
//! Defaults to data/people.json and person 4.

use kinship_matcher::models::{MatcherConfig, PersonId};
use kinship_matcher::report::{describe, format_match_report};
use kinship_matcher::{FamilyMatcher, PeopleDataset};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATASET: &str = "data/people.json";
const DEFAULT_TARGET: PersonId = 4;

fn demo_error(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let mut args = std::env::args().skip(1);
    let dataset_path = args.next().unwrap_or_else(|| DEFAULT_DATASET.to_string());
    let target_id = match args.next() {
        Some(raw) => raw
            .parse::<PersonId>()
            .map_err(|e| demo_error(format!("Invalid person id {:?}: {}", raw, e)))?,
        None => DEFAULT_TARGET,
    };

    let dataset = PeopleDataset::load(&dataset_path)
        .await
        .map_err(|e| demo_error(format!("Failed to load {}: {}", dataset_path, e)))?;

    let target = dataset
        .find(target_id)
        .ok_or_else(|| demo_error(format!("Person {} not found in {}", target_id, dataset_path)))?;

    let matcher = FamilyMatcher::new(MatcherConfig::default());
    info!("Matching {} against {} people", describe(target), dataset.len() - 1);

    let matches = matcher.find_family_matches(target, dataset.pool_excluding(target_id));
    print!("{}", format_match_report(target, &matches));

    Ok(())
}

// Criterion benchmarks for Kinship Matcher

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use kinship_matcher::core::similarity::compare_strings;
use kinship_matcher::models::Person;
use kinship_matcher::FamilyMatcher;

const SURNAMES: &[&str] = &["Smith", "Smithe", "Johnson", "Garcia", "Johnston", "Novak"];
const LOCATIONS: &[&str] = &["New York", "Chicago", "Boston", "Miami"];

fn create_person(id: usize) -> Person {
    Person::new(
        id as u64,
        format!("Person {}", id),
        SURNAMES[id % SURNAMES.len()],
        (id % 90) as u32,
        LOCATIONS[id % LOCATIONS.len()],
    )
}

fn bench_compare_strings(c: &mut Criterion) {
    c.bench_function("compare_strings", |b| {
        b.iter(|| compare_strings(black_box("Johnson"), black_box("Johnston")));
    });
}

fn bench_pairwise(c: &mut Criterion) {
    let matcher = FamilyMatcher::with_default_config();
    let parent = Person::new(1, "John", "Smith", 45, "New York");
    let child = Person::new(4, "Emily", "Smith", 13, "New York");

    c.bench_function("find_possible_relationships", |b| {
        b.iter(|| matcher.find_possible_relationships(black_box(&parent), black_box(&child)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = FamilyMatcher::with_default_config();
    let target = Person::new(0, "Emily", "Smith", 13, "New York");

    let mut group = c.benchmark_group("matching");

    for pool_size in [10, 100, 1000, 5000].iter() {
        let pool: Vec<Person> = (1..=*pool_size).map(create_person).collect();

        group.bench_with_input(
            BenchmarkId::new("find_family_matches", pool_size),
            pool_size,
            |b, _| {
                b.iter(|| matcher.find_family_matches(black_box(&target), black_box(&pool)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compare_strings, bench_pairwise, bench_matching);

criterion_main!(benches);

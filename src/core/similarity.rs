use crate::models::Person;
use std::collections::HashMap;

/// Weight of surname-only similarity in the blended name score
const SURNAME_WEIGHT: f64 = 0.7;
/// Weight of full "first last" similarity in the blended name score
const FULL_NAME_WEIGHT: f64 = 0.3;

/// Compare two strings with the Sørensen–Dice coefficient over character bigrams
///
/// Case-insensitive and whitespace-insensitive. Identical strings score 1.0,
/// strings without any shared bigram score 0.0.
///
/// # Returns
/// Similarity in the range [0, 1]
pub fn compare_strings(first: &str, second: &str) -> f64 {
    let first = normalize(first);
    let second = normalize(second);

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams: HashMap<(char, char), usize> = HashMap::with_capacity(first.len());
    for pair in first.windows(2) {
        *first_bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    // Multiset intersection: each bigram of `first` can be claimed once
    let mut shared = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = first_bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    let total = (first.len() - 1) + (second.len() - 1);
    (2 * shared) as f64 / total as f64
}

/// Similarity of last names only
#[inline]
pub fn surname_similarity<Id>(a: &Person<Id>, b: &Person<Id>) -> f64 {
    compare_strings(&a.last_name, &b.last_name)
}

/// Blended name similarity: 70% surname, 30% full name
///
/// Exposed for callers comparing name evidence directly. The sibling and
/// parent/child rules score on `surname_similarity` instead.
pub fn name_similarity<Id>(a: &Person<Id>, b: &Person<Id>) -> f64 {
    let full_name = compare_strings(&a.full_name(), &b.full_name());
    let surname = surname_similarity(a, b);

    surname * SURNAME_WEIGHT + full_name * FULL_NAME_WEIGHT
}

fn normalize(value: &str) -> Vec<char> {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(compare_strings("smith", "smith"), 1.0);
        assert_eq!(compare_strings("Smith", "SMITH"), 1.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(compare_strings("smith", "garcia"), 0.0);
    }

    #[test]
    fn test_typo_surname() {
        // 4 shared bigrams out of 4 + 5
        let sim = compare_strings("Smith", "Smithe");
        assert!((sim - 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(
            compare_strings("johnson", "johnston"),
            compare_strings("johnston", "johnson")
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(compare_strings("van der berg", "vanderberg"), 1.0);
    }

    #[test]
    fn test_short_strings() {
        assert_eq!(compare_strings("a", "b"), 0.0);
        assert_eq!(compare_strings("a", "A"), 1.0);
        assert_eq!(compare_strings("", "ab"), 0.0);
    }

    #[test]
    fn test_repeated_bigrams_counted_once_each() {
        // "aaaa" has bigram "aa" three times, "aa" only once
        let sim = compare_strings("aaaa", "aa");
        assert!((sim - 2.0 / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_name_similarity_blend() {
        let emily = Person::new(4u64, "Emily", "Smith", 13, "New York");
        let michael = Person::new(3u64, "Michael", "Smith", 15, "New York");

        let blended = name_similarity(&emily, &michael);
        let full = compare_strings("Emily Smith", "Michael Smith");

        assert!((blended - (0.7 + 0.3 * full)).abs() < 1e-9);
        assert!(blended < 1.0);
        assert_eq!(surname_similarity(&emily, &michael), 1.0);
    }

    #[test]
    fn test_name_similarity_identical_people() {
        let a = Person::new(1u64, "John", "Smith", 45, "New York");
        assert!((name_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }
}
